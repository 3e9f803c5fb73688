use super::*;

fn generated(id: &str, size: u64) -> CreatureOutcome {
    let check = BudgetCheck::new(format!("{id}.webp"), size);
    CreatureOutcome::Generated(GenerationResult {
        creature_id: id.to_owned(),
        file_name: check.file_name.clone(),
        location: PathBuf::from(&check.file_name),
        size_bytes: size,
        passed_size_gate: check.passed,
    })
}

fn failed(id: &str, error: SpriteError) -> CreatureOutcome {
    CreatureOutcome::Failed {
        creature_id: id.to_owned(),
        error: error.for_creature(id),
    }
}

#[test]
fn outcome_lines_follow_budget_format() {
    assert_eq!(generated("cultist", 35_021).to_string(), "cultist.webp: 34.2KB ✓");
    assert_eq!(
        generated("mystic", 10_240).to_string(),
        "mystic.webp: 10.0KB ✗ (below 20KB)"
    );
    let line = failed("automaton", SpriteError::Timeout(std::time::Duration::from_secs(2))).to_string();
    assert!(line.starts_with("automaton: failed [timeout]"), "{line}");
}

#[test]
fn summary_groups_failures_by_kind() {
    let report = BatchReport {
        base_seed: 7,
        outcomes: vec![
            generated("cultist", 40_000),
            failed("jawWorm", SpriteError::encoding("bad")),
            generated("mystic", 100),
            failed("bronzeOrb", SpriteError::encoding("worse")),
            failed("automaton", SpriteError::io("x", std::io::Error::other("denied"))),
        ],
        cancelled: false,
    };

    assert_eq!(
        report.failure_counts(),
        vec![(FailureKind::Encoding, 2), (FailureKind::Io, 1)]
    );
    assert_eq!(report.below_budget().count(), 1);

    let text = report.to_string();
    assert!(text.starts_with("Generated 2/5 sprites (seed 7)\n"));
    assert!(text.contains("Below size budget: mystic.webp\n"));
    assert!(text.contains("  encoding: 2\n"));
    assert!(text.contains("  io: 1\n"));
    assert!(text.contains("  - jawWorm: creature 'jawWorm':"));
}

#[test]
fn clean_summary_has_no_failure_section() {
    let report = BatchReport {
        base_seed: 1,
        outcomes: vec![generated("cultist", 40_000)],
        cancelled: false,
    };
    assert!(!report.has_failures());
    assert_eq!(report.to_string(), "Generated 1/1 sprites (seed 1)\n");
}
