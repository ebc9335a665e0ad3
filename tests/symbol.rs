use reticle::sans::{header::DataType, symbol::RecordType};

#[test]
fn lookup_known_codes() {
    assert_eq!(RecordType::lookup(0), Some(RecordType::Header));
    assert_eq!(RecordType::lookup(5), Some(RecordType::BgnStr));
    assert_eq!(RecordType::lookup(16), Some(RecordType::Xy));
    assert_eq!(RecordType::lookup(56), Some(RecordType::ShortNumber));
    assert_eq!(RecordType::lookup(61), Some(RecordType::EndMasks));
}

#[test]
fn lookup_reserved_codes() {
    for code in [24, 29, 30, 36, 37, 39, 40, 41, 50, 51, 52, 53] {
        assert_eq!(RecordType::lookup(code), None, "code {code}");
    }
    for code in 62..=u8::MAX {
        assert_eq!(RecordType::lookup(code), None, "code {code}");
    }
}

#[test]
fn lookup_round_trips_codes() {
    let known = (0..=u8::MAX).filter_map(RecordType::lookup);

    let mut count = 0;
    for record_type in known {
        assert_eq!(RecordType::lookup(record_type.code()), Some(record_type));
        count += 1;
    }
    assert_eq!(count, 50);
}

#[test]
fn record_names() {
    assert_eq!(RecordType::BgnLib.name(), "BGNLIB");
    assert_eq!(RecordType::STrans.to_string(), "STRANS");
    assert_eq!(RecordType::Box.to_string(), "BOX");
}

#[test]
fn data_type_codes() {
    assert_eq!(DataType::from_code(0), DataType::None);
    assert_eq!(DataType::from_code(3), DataType::Int32);
    assert_eq!(DataType::from_code(6), DataType::String);
    assert_eq!(DataType::from_code(7), DataType::Invalid(7));
    assert_eq!(DataType::from_code(200).code(), 200);

    assert_eq!(DataType::BitArray.unit_size(), Some(2));
    assert_eq!(DataType::Float64.unit_size(), Some(8));
    assert_eq!(DataType::String.unit_size(), None);
}
