use once_cell::sync::Lazy;

/// First RAM address handed out to user variables.
pub const VAR_BASE: u16 = 16;

pub const SCREEN: u16 = 16384;
pub const KBD: u16 = 24576;

/// Symbols defined before any user code is read, in declaration order.
/// `SP`..`THAT` alias `R0`..`R4`.
pub static PREDEFINED: Lazy<Vec<(String, u16)>> = Lazy::new(|| {
    let mut symbols = vec![
        ("SP".to_string(), 0),
        ("LCL".to_string(), 1),
        ("ARG".to_string(), 2),
        ("THIS".to_string(), 3),
        ("THAT".to_string(), 4),
    ];
    symbols.extend((0..VAR_BASE).map(|n| (format!("R{}", n), n)));
    symbols.push(("SCREEN".to_string(), SCREEN));
    symbols.push(("KBD".to_string(), KBD));
    symbols
});

#[test]
fn test() {
    let get = |name: &str| {
        PREDEFINED
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, val)| *val)
    };
    assert_eq!(PREDEFINED.len(), 23);
    assert_eq!(get("R0"), Some(0));
    assert_eq!(get("R15"), Some(15));
    assert_eq!(get("SP"), get("R0"));
    assert_eq!(get("THAT"), get("R4"));
    assert_eq!(get("SCREEN"), Some(16384));
    assert_eq!(get("KBD"), Some(24576));
    assert_eq!(get("R16"), None);
}
