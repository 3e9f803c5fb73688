use super::*;

#[test]
fn threshold_is_strict() {
    assert_eq!(MIN_ARTIFACT_BYTES, 20_480);
    assert!(!passes(0));
    assert!(!passes(20_480));
    assert!(passes(20_481));
}

#[test]
fn report_lines() {
    assert_eq!(
        BudgetCheck::new("cultist.webp", 35_021).to_string(),
        "cultist.webp: 34.2KB ✓"
    );
    assert_eq!(
        BudgetCheck::new("jawWorm.png", 20_480).to_string(),
        "jawWorm.png: 20.0KB ✗ (below 20KB)"
    );
}

#[test]
fn from_file_reads_back_size() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("unit-scratch")
        .join("budget_from_file");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mystic.webp");
    std::fs::write(&path, vec![0u8; 20_481]).unwrap();

    let check = BudgetCheck::from_file(&path).unwrap();
    assert_eq!(check.file_name, "mystic.webp");
    assert_eq!(check.size_bytes, 20_481);
    assert!(check.passed);

    let exact = dir.join("bronzeOrb.webp");
    std::fs::write(&exact, vec![0u8; 20_480]).unwrap();
    let check = BudgetCheck::from_file(&exact).unwrap();
    assert_eq!(check.size_bytes, 20_480);
    assert!(!check.passed);

    let missing = BudgetCheck::from_file(&dir.join("absent.webp")).unwrap_err();
    assert!(missing.to_string().contains("absent.webp"));
}
