use dnslite_domain::{DnsRecord, DomainError, NewRecord, RecordFilter, RecordType, ResponseCode};

mod helpers;
use helpers::DnsRecordBuilder;

#[test]
fn test_record_serializes_with_wire_field_names() {
    let record = DnsRecordBuilder::new()
        .name("www.example.com.")
        .value("93.184.216.34")
        .ttl(120)
        .id(7)
        .build();

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "www.example.com.");
    assert_eq!(json["type"], "A");
    assert_eq!(json["value"], "93.184.216.34");
    assert_eq!(json["ttl"], 120);
}

#[test]
fn test_record_without_id_omits_field() {
    let record = DnsRecordBuilder::new().build();
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("id").is_none());
}

#[test]
fn test_record_round_trips_through_json() {
    let record = DnsRecordBuilder::new()
        .record_type(RecordType::TXT)
        .value("v=spf1 -all")
        .build();

    let json = serde_json::to_string(&record).unwrap();
    let back: DnsRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back, record);
}

#[test]
fn test_new_record_keeps_unknown_type_string() {
    let body = r#"{"name":"example.com.","type":"MX","value":"10 mail.example.com."}"#;
    let new: NewRecord = serde_json::from_str(body).unwrap();

    assert_eq!(new.record_type, "MX");
    assert_eq!(new.ttl, None);
    assert!(new.record_type.parse::<RecordType>().is_err());
}

#[test]
fn test_new_record_into_record_defaults_ttl_to_zero() {
    let new = NewRecord::new("example.com.", "a", "10.0.0.1", None);
    let record = new.into_record(RecordType::A);
    assert_eq!(record.ttl, 0);
    assert_eq!(record.record_type, RecordType::A);
}

#[test]
fn test_check_common_failure_maps_to_bad_request() {
    let mut record = DnsRecordBuilder::new().name("no-trailing-dot.com").build();
    let err = record.check_common(600).unwrap_err();

    assert!(matches!(err, DomainError::InvalidRecord(_)));
    assert_eq!(err.response_code(), ResponseCode::BadRequest);
}

#[test]
fn test_filter_matches_name_case_insensitively() {
    let record = DnsRecordBuilder::new().name("www.example.com.").build();
    let filter = RecordFilter {
        name: Some("WWW.EXAMPLE.COM.".to_string()),
        record_type: None,
    };
    assert!(filter.matches(&record));
}

#[test]
fn test_filter_by_type() {
    let record = DnsRecordBuilder::new().record_type(RecordType::AAAA).build();
    let a_only = RecordFilter {
        name: None,
        record_type: Some(RecordType::A),
    };
    assert!(!a_only.matches(&record));
    assert!(RecordFilter::default().matches(&record));
}

#[test]
fn test_ns_is_not_administrable() {
    assert!(!RecordType::NS.is_administrable());
    assert!(RecordType::CNAME.is_administrable());
}
