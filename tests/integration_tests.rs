//! Integration tests for railfence
//!
//! Note: decrypt() never detects wrong parameters - a wrong rail count or
//! method returns a garbled text, not an error.

use railfence::lab::{readability_score, ScoreBand};
use railfence::{
    brute_force, clean_text, decrypt, encrypt, encrypt_with_config, export_text, statistics,
    Config, Direction, EncryptConfig, Method, RailFenceError, RailRange, MAX_RAILS,
};

/// Test the classic textbook example
#[test]
fn test_textbook_zigzag() {
    let result = encrypt("WEAREDISCOVEREDFLEEATONCE", 3, Method::Zigzag).unwrap();
    assert_eq!(result.text, "WECRLTEERDSOEEFEAOCAIVDEN");
}

/// Test sequential encryption of the built-in sample
#[test]
fn test_hello_world_sequential() {
    let result = encrypt("Hello, world!", 3, Method::Sequential).unwrap();

    assert_eq!(result.text, "Hl r!eowll,od");
    assert_eq!(result.text.chars().count(), 13);
    assert_eq!(
        result.matrix.readout_line(),
        "Rail1: Hl r! → Rail2: eowl → Rail3: l,od"
    );

    // Sequential assignment is i % N
    for step in &result.trace {
        assert_eq!(step.rail, step.column % 3);
    }
}

/// Test the built-in sample in both directions
#[test]
fn test_hello_world_roundtrip() {
    for method in Method::ALL {
        let encrypted = encrypt("Hello, world!", 3, method).unwrap();
        let decrypted = decrypt(&encrypted.text, 3, method).unwrap();
        assert_eq!(decrypted.text, "Hello, world!");
        assert_eq!(decrypted.matrix, encrypted.matrix);
    }
}

/// Test that the decryption grid matches the encryption grid cell by cell
#[test]
fn test_trace_consistency() {
    let encrypted = encrypt("attack at dawn", 4, Method::Zigzag).unwrap();
    let decrypted = decrypt(&encrypted.text, 4, Method::Zigzag).unwrap();

    assert_eq!(encrypted.trace, decrypted.trace);
    assert_eq!(encrypted.trace.len(), 14);
    for (i, step) in encrypted.trace.iter().enumerate() {
        assert_eq!(step.column, i);
    }
}

/// Test that wrong parameters produce garbage, not errors
#[test]
fn test_wrong_parameters_return_garbage() {
    let encrypted = encrypt("meet me at the park", 4, Method::Zigzag).unwrap();

    let wrong_rails = decrypt(&encrypted.text, 3, Method::Zigzag).unwrap();
    let wrong_method = decrypt(&encrypted.text, 4, Method::Sequential).unwrap();

    assert_ne!(wrong_rails.text, "meet me at the park");
    assert_ne!(wrong_method.text, "meet me at the park");
    assert_eq!(wrong_rails.text.chars().count(), 19);
    assert_eq!(wrong_method.text.chars().count(), 19);
}

/// Test rejection of a zero rail count
#[test]
fn test_zero_rails_error() {
    assert_eq!(
        encrypt("abc", 0, Method::Sequential).unwrap_err(),
        RailFenceError::InvalidRailCount(0)
    );
    assert_eq!(
        decrypt("abc", 0, Method::Zigzag).unwrap_err(),
        RailFenceError::InvalidRailCount(0)
    );
}

/// Test that absurd rail counts are rejected instead of allocating a huge grid
#[test]
fn test_rail_count_upper_bound() {
    assert_eq!(
        encrypt("abc", usize::MAX, Method::Sequential).unwrap_err(),
        RailFenceError::InvalidRailCount(usize::MAX)
    );
    assert_eq!(
        decrypt("", 1 << 62, Method::Zigzag).unwrap_err(),
        RailFenceError::InvalidRailCount(1 << 62)
    );
    assert_eq!(encrypt("abc", MAX_RAILS, Method::Zigzag).unwrap().text, "abc");
    assert!("2-100000000".parse::<RailRange>().is_err());
}

/// Test that one rail and oversized rail counts leave the text unchanged
#[test]
fn test_identity_configurations() {
    for method in Method::ALL {
        assert_eq!(encrypt("hello", 1, method).unwrap().text, "hello");
        assert_eq!(encrypt("hello", 5, Method::Sequential).unwrap().text, "hello");
        assert_eq!(encrypt("hello", 50, method).unwrap().text, "hello");
    }
}

/// Test the cleaning options end to end
#[test]
fn test_encrypt_with_cleaning() {
    let config = EncryptConfig {
        remove_space: true,
        remove_symbol: true,
    };
    let message = encrypt_with_config("Hello,\nworld!", 3, Method::Sequential, &config).unwrap();

    assert_eq!(message.cleaned, "Helloworld");
    assert_eq!(message.ciphertext(), "Hlodeorlwl");

    let decrypted = decrypt(message.ciphertext(), 3, Method::Sequential).unwrap();
    assert_eq!(decrypted.text, "Helloworld");
}

/// Test that line breaks are always removed
#[test]
fn test_line_breaks_removed() {
    assert_eq!(clean_text("a\r\nb\nc", false, false), "abc");
    let message = encrypt_with_config(
        "ab\ncd",
        2,
        Method::Sequential,
        &EncryptConfig::default(),
    )
    .unwrap();
    assert_eq!(message.cleaned, "abcd");
    assert_eq!(message.ciphertext(), "acbd");
}

/// Test Japanese text survives a roundtrip character for character
#[test]
fn test_japanese_roundtrip() {
    let plain = "こんにちは、世界。レールフェンス暗号";
    for method in Method::ALL {
        for rails in 2..=6 {
            let encrypted = encrypt(plain, rails, method).unwrap();
            assert_eq!(encrypted.text.chars().count(), plain.chars().count());
            let decrypted = decrypt(&encrypted.text, rails, method).unwrap();
            assert_eq!(decrypted.text, plain);
        }
    }
}

/// Test that brute force ranks the real plaintext first
#[test]
fn test_brute_force_recovers_plaintext() {
    let plain = "meet me at the park and bring the map";
    let ciphertext = encrypt(plain, 4, Method::Zigzag).unwrap().text;

    let candidates = brute_force(&ciphertext, 2, 10, true);

    assert_eq!(candidates.len(), 18);
    let best = &candidates[0];
    assert_eq!(best.rails, 4);
    assert_eq!(best.method, Method::Zigzag);
    assert_eq!(best.plaintext, plain);
    assert_eq!(best.score, 78);
    assert_eq!(best.band(), ScoreBand::High);
}

/// Test brute force with the sequential method only
#[test]
fn test_brute_force_sequential_only() {
    let ciphertext = encrypt("they are with you", 3, Method::Sequential).unwrap().text;
    let candidates = brute_force(&ciphertext, 2, 6, false);

    assert_eq!(candidates.len(), 5);
    assert!(candidates.iter().all(|c| c.method == Method::Sequential));
    assert_eq!(candidates[0].plaintext, "they are with you");
    assert_eq!(candidates[0].score, 110);

    // Sorted best first
    for pair in candidates.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

/// Test that equal scores keep sweep order
#[test]
fn test_brute_force_tie_order() {
    // Every rail count leaves a single character unchanged
    let candidates = brute_force("x", 2, 4, true);
    let order: Vec<(usize, Method)> = candidates.iter().map(|c| (c.rails, c.method)).collect();

    assert_eq!(
        order,
        vec![
            (2, Method::Sequential),
            (2, Method::Zigzag),
            (3, Method::Sequential),
            (3, Method::Zigzag),
            (4, Method::Sequential),
            (4, Method::Zigzag),
        ]
    );
}

/// Test brute force over an empty range
#[test]
fn test_brute_force_empty_range() {
    assert!(brute_force("abc", 5, 4, true).is_empty());
}

/// Test the readability heuristic on plain and scrambled text
#[test]
fn test_readability_prefers_plaintext() {
    let plain = "they are with you";
    let scrambled = encrypt(plain, 3, Method::Sequential).unwrap().text;
    assert!(readability_score(plain) > readability_score(&scrambled));
}

/// Test the statistics experiment covers every configuration
#[test]
fn test_statistics_report() {
    let report = statistics("  defend the east wall  ");

    assert_eq!(report.entries.len(), 10);
    let configs: Vec<(usize, Method)> = report.entries.iter().map(|e| (e.rails, e.method)).collect();
    assert_eq!(configs[0], (2, Method::Sequential));
    assert_eq!(configs[1], (2, Method::Zigzag));
    assert_eq!(configs[9], (6, Method::Zigzag));

    for entry in &report.entries {
        // Whitespace is stripped before encrypting
        assert!(!entry.ciphertext.contains(' '));
        assert_eq!(entry.ciphertext.chars().count(), 17);
        assert!(entry.avg_movement >= 0.0);
        assert!(entry.max_movement as f64 >= entry.avg_movement);
        assert!(entry.original_entropy >= 0.0);
    }

    let best = report.most_dispersive().unwrap();
    assert!(report.entries.iter().all(|e| e.avg_movement <= best.avg_movement));
}

/// Test the text export of an encryption
#[test]
fn test_export_encrypt_layout() {
    let result = encrypt("abcde", 2, Method::Zigzag).unwrap();
    let text = export_text(Direction::Encrypt, "abcde", &result);

    assert!(text.starts_with("Rail Fence Cipher - Rail Layout\n"));
    assert!(text.contains("Plaintext: abcde\n"));
    assert!(text.contains("Rails: 2\n"));
    assert!(text.contains("Method: zigzag (bounce)\n"));
    assert!(text.contains("Rail 1: a - c - e\n"));
    assert!(text.contains("Rail 2: - b - d -\n"));
    assert!(text.contains("Ciphertext: acebd\n"));
}

/// Test method names and aliases
#[test]
fn test_method_parsing() {
    assert_eq!("sequential".parse::<Method>().unwrap(), Method::Sequential);
    assert_eq!("ZIGZAG".parse::<Method>().unwrap(), Method::Zigzag);
    assert_eq!("2".parse::<Method>().unwrap(), Method::Zigzag);
    assert!(matches!(
        "spiral".parse::<Method>(),
        Err(RailFenceError::UnknownMethod(_))
    ));
}

/// Test config persistence and the derived lab range
#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.rails = 5;
    config.method = Method::Zigzag;
    config.lab.min_rails = 3;
    config.lab.max_rails = 7;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.rail_range().unwrap(), RailRange::new(3, 7).unwrap());
}
