//! Integration tests for the command model
//!
//! Exercises the alias-to-vector-to-buffer path the way the launcher
//! facade uses it, across every recognized alias form.

use protocol::{
    Action, COMMAND_LEN, DEFAULT_H_AMP, DEFAULT_V_AMP, INIT_A, INIT_B, INIT_LEN, PRODUCT_ID,
    VECTOR_LEN, VENDOR_ID, encode_command,
};

#[test]
fn test_numpad_layout_matches_compass() {
    // Numpad digits lay out as a compass rose around the (excluded) 5 key.
    let expected = [
        ("1", Action::DownLeft),
        ("2", Action::Down),
        ("3", Action::DownRight),
        ("4", Action::Left),
        ("6", Action::Right),
        ("7", Action::UpLeft),
        ("8", Action::Up),
        ("9", Action::UpRight),
    ];

    for (digit, action) in expected {
        assert_eq!(Action::from_alias(digit), Some(action));
    }
    assert_eq!(Action::from_alias("5"), None);
}

#[test]
fn test_every_alias_form_encodes_the_same_buffer() {
    for (name, abbrev, digit) in [
        ("up", "u", "8"),
        ("down", "d", "2"),
        ("left", "l", "4"),
        ("right", "r", "6"),
        ("northwest", "nw", "7"),
        ("northeast", "ne", "9"),
        ("southwest", "sw", "1"),
        ("southeast", "se", "3"),
    ] {
        let encode = |alias: &str| {
            let action = Action::from_alias(alias).expect("alias must resolve");
            encode_command(action, DEFAULT_H_AMP, DEFAULT_V_AMP)
        };
        assert_eq!(encode(name), encode(abbrev));
        assert_eq!(encode(name), encode(digit));
        assert_eq!(encode(name), encode(&name.to_uppercase()));
    }
}

#[test]
fn test_northeast_wire_bytes() {
    for alias in ["northeast", "9", "ne"] {
        let action = Action::from_alias(alias).unwrap();
        let buf = encode_command(action, DEFAULT_H_AMP, DEFAULT_V_AMP);
        assert_eq!(&buf[..VECTOR_LEN], &[0, 0, 1, 1, 0, 0]);
        assert_eq!(buf[VECTOR_LEN], 4);
        assert_eq!(buf[VECTOR_LEN + 1], 2);
        assert!(buf[VECTOR_LEN + 2..].iter().all(|&b| b == 0));
        assert_eq!(buf.len(), COMMAND_LEN);
    }
}

#[test]
fn test_device_identity_constants() {
    assert_eq!(VENDOR_ID, 0x1130);
    assert_eq!(PRODUCT_ID, 0x0202);
    assert_eq!(INIT_A.len(), INIT_LEN);
    assert_eq!(INIT_B.len(), INIT_LEN);
    assert_ne!(INIT_A, INIT_B);
}
