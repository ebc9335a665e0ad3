#![cfg(feature = "std")]

use std::{fs::File, io::BufReader, path::Path};

use csv::ReaderBuilder;
use reticle::{
    avec::{Token, Tokenizer},
    sans::symbol::RecordType,
};

#[test]
fn tokenize_reader_minimal() {
    const PATH: &str = "fixtures/minimal.gds";
    let file = BufReader::new(File::open(PATH).unwrap());
    let mut tokenizer = Tokenizer::new(file, PATH);
    let mut validator = Validator::new(PATH);

    loop {
        let token = tokenizer.next_token().unwrap();
        validator.validate(&token);

        if token == Token::Record(Some(RecordType::EndLib)) {
            break;
        }
    }

    assert!(validator.0.is_empty());
    assert_eq!(tokenizer.remaining(), 0);
    assert_eq!(tokenizer.offset(), std::fs::metadata(PATH).unwrap().len());
}

#[test]
fn tokenize_slice_minimal() {
    const PATH: &str = "fixtures/minimal.gds";
    let data = std::fs::read(PATH).unwrap();
    let mut tokenizer = Tokenizer::new(data.as_slice(), PATH);
    let mut validator = Validator::new(PATH);

    while !validator.0.is_empty() {
        let token = tokenizer.next_token().unwrap();
        validator.validate(&token);
    }

    // Nothing follows the end of the library.
    let error = tokenizer.next_token().unwrap_err();
    assert!(matches!(error.kind, reticle::avec::ErrorKind::Truncated));
    assert_eq!(error.offset, data.len() as u64);
}

#[test]
fn read_library_dates() {
    const PATH: &str = "fixtures/minimal.gds";
    let data = std::fs::read(PATH).unwrap();
    let mut tokenizer = Tokenizer::new(data.as_slice(), PATH);

    assert_eq!(tokenizer.next_token().unwrap().record_type(), Some(RecordType::Header));
    assert_eq!(tokenizer.next_token().unwrap(), Token::Int16(600));
    assert_eq!(tokenizer.next_token().unwrap().record_type(), Some(RecordType::BgnLib));

    let modified = tokenizer.read_timestamp().unwrap();
    let accessed = tokenizer.read_timestamp().unwrap();
    assert_eq!(modified.to_string(), "1999-06-15 10:30:00");
    assert_eq!(accessed.to_string(), "2024-01-02 03:04:05");

    assert_eq!(tokenizer.next_token().unwrap().record_type(), Some(RecordType::LibName));
    assert_eq!(tokenizer.next_token().unwrap(), Token::Str("DEMO.DB".into()));
}

/// Expected tokens, as `kind,value` rows.
struct Validator(Vec<(String, String)>);

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].to_string())
            })
            .collect();

        Self(expected)
    }

    fn validate(&mut self, token: &Token) {
        let (kind, value) = self.0.remove(0);

        match token {
            Token::Record(record_type) => {
                assert_eq!(kind, "record");
                assert_eq!(record_type.map(|r| r.name()), Some(value.as_str()));
            }
            Token::Flags(v) => {
                assert_eq!(kind, "flags");
                assert_eq!(value, v.to_string());
            }
            Token::Int16(v) => {
                assert_eq!(kind, "int16");
                assert_eq!(value, v.to_string());
            }
            Token::Int32(v) => {
                assert_eq!(kind, "int32");
                assert_eq!(value, v.to_string());
            }
            Token::Real(v) => {
                assert_eq!(kind, "real");
                assert_eq!(value.parse::<f64>().unwrap(), *v);
            }
            Token::Str(v) => {
                assert_eq!(kind, "str");
                assert_eq!(&value, v);
            }
        }
    }
}
