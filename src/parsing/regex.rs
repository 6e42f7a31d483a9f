use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Decimal integers, fractions and exponent forms, optionally signed, plus "Infinity"
    pub static ref RE_DECIMAL: Regex = Regex::new(r"^[+-]?(?:(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?|Infinity)$").unwrap();
    // Unsigned hex/octal/binary literals such as 0x1F, 0o17, 0b101
    pub static ref RE_RADIX: Regex = Regex::new(r"^0(?P<radix>[xXoObB])(?P<digits>[0-9a-fA-F]+)$").unwrap();
}
