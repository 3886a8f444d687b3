//! WAPI record views.
//!
//! Records are displayed as returned, only the fields the tool acts on are typed.

use super::Network;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The part of an `ipv4address` record used to find its network.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct IpRecord {
    /// Network containing the address, as configured in Infoblox.
    #[serde(default)]
    pub network: Option<Network>,
}

/// Ordered list of records returned by a WAPI search.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct LookupResult(pub Vec<Value>);

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Typed view of the first record, only `network` is read.
    pub fn first_ip_record(&self) -> Option<Result<IpRecord, serde_json::Error>> {
        self.0.first().map(|v| IpRecord::deserialize(v))
    }
}

impl From<LookupResult> for Value {
    fn from(result: LookupResult) -> Value {
        Value::Array(result.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_ip_record_reads_network_only() {
        let result: LookupResult = serde_json::from_value(json!([
            {
                "_ref": "ipv4address/Li5pcHY0X2FkZHJlc3MkMTAuMC4wLjEvMA:10.0.0.1",
                "ip_address": "10.0.0.1",
                "network": "10.0.0.0/24",
                "status": "USED",
                "names": ["host1.example.com"]
            },
            { "ip_address": "10.0.0.2", "network": "10.0.0.0/24" }
        ]))
        .unwrap();
        assert_eq!(result.len(), 2);
        let rec = result.first_ip_record().unwrap().unwrap();
        assert_eq!(rec.network, Some("10.0.0.0/24".parse().unwrap()));
    }

    #[test]
    fn test_first_ip_record_without_network() {
        let result = LookupResult(vec![json!({ "ip_address": "10.0.0.1" })]);
        let rec = result.first_ip_record().unwrap().unwrap();
        assert!(rec.network.is_none());
        assert!(LookupResult::default().first_ip_record().is_none());
    }

    #[test]
    fn test_first_ip_record_bad_network() {
        let result = LookupResult(vec![json!({ "network": "not-a-cidr" })]);
        assert!(result.first_ip_record().unwrap().is_err());
    }

    #[test]
    fn test_into_value_keeps_order() {
        let result = LookupResult(vec![json!({"a": 1}), json!({"b": 2})]);
        assert_eq!(Value::from(result), json!([{"a": 1}, {"b": 2}]));
    }
}
