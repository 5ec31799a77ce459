use std::fs;
use std::path::PathBuf;

use sharecard::{plan_digest, render_request_json, LayoutPlan, MonospaceMeasurer};

fn golden_path(name: &str, ext: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(format!("{name}.{ext}"));
    p
}

/// Header line, then every section's text runs in paint order.
fn text_outline(plan: &LayoutPlan) -> String {
    let mut lines = vec![format!(
        "{} {} {}x{}",
        plan.card_type, plan.format, plan.width, plan.height
    )];
    for section in &plan.sections {
        lines.push(format!("[{:?}]", section.kind));
        lines.extend(section.commands.iter().filter_map(|c| c.text()).map(str::to_string));
    }
    lines.join("\n")
}

fn render_fixture(fixture: &str) -> LayoutPlan {
    let body = fs::read_to_string(format!("tests/fixtures/{fixture}.json")).expect("read fixture");
    render_request_json(&body, &MonospaceMeasurer).expect("render fixture")
}

fn check_golden(fixture: &str) {
    let plan = render_fixture(fixture);
    let outline = text_outline(&plan);
    let digest = plan_digest(&plan).expect("digest plan");

    let texts_path = golden_path(fixture, "texts");
    let digest_path = golden_path(fixture, "sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&texts_path, format!("{outline}\n")).expect("write golden");
        fs::write(&digest_path, &digest).expect("write golden");
        println!("Updated goldens: {:?}, {:?}", texts_path, digest_path);
        return;
    }

    let expected = fs::read_to_string(&texts_path).expect("unable to read golden");
    assert_eq!(outline, expected.trim_end(), "text of {fixture} changed");

    // digests pin geometry too; they are written by UPDATE_GOLDENS=1
    if digest_path.exists() {
        let expected = fs::read_to_string(&digest_path).expect("unable to read golden");
        assert_eq!(digest, expected.trim(), "plan for {fixture} changed");
    }
}

#[test]
fn golden_bike_intervals() {
    check_golden("bike_intervals");
}

#[test]
fn golden_legacy_2k() {
    check_golden("legacy_2k");
}

#[test]
fn golden_regatta_result() {
    check_golden("regatta_result");
}

#[test]
fn golden_team_leaderboard() {
    check_golden("team_leaderboard");
}

#[test]
fn digest_ignores_nothing_visible() {
    let body = fs::read_to_string("tests/fixtures/legacy_2k.json").expect("read fixture");
    let a = render_request_json(&body, &MonospaceMeasurer).expect("render");
    let b = render_request_json(&body.replace("Sam Rower", "Sam Rowe"), &MonospaceMeasurer)
        .expect("render");
    assert_ne!(plan_digest(&a).unwrap(), plan_digest(&b).unwrap());
}

#[test]
fn digest_is_stable_across_runs() {
    for fixture in ["bike_intervals", "regatta_result", "team_leaderboard"] {
        let a = plan_digest(&render_fixture(fixture)).unwrap();
        let b = plan_digest(&render_fixture(fixture)).unwrap();
        assert_eq!(a, b, "{fixture}");
        assert_eq!(a.len(), 64);
    }
}
