use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_probdist"))
}

fn tmp_file(name: &str, contents: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("probdist_cli_{}_{}_{}", std::process::id(), nanos, name));
    std::fs::write(&p, contents).unwrap();
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn stdout_json(out: &Output) -> serde_json::Value {
    assert!(
        out.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout should be JSON")
}

#[test]
fn binomial_fits_binary_file() {
    let input = tmp_file("binary.txt", "1\n0\n0\n1\n0\n0\n");
    let out = run(&["binomial", "--input", input.to_str().unwrap(), "--k", "2", "--k", "6"]);
    let v = stdout_json(&out);

    assert_eq!(v["n"], 6);
    assert!((v["p"].as_f64().unwrap() - 2.0 / 6.0).abs() < 1e-12);
    assert_eq!(v["summary"]["family"], "binomial");
    assert_eq!(v["summary"]["n_samples"], 6);
    assert_eq!(v["pmf"].as_array().unwrap().len(), 2);
    let p6 = v["pmf"][1]["pmf"].as_f64().unwrap();
    assert!((p6 - (1.0_f64 / 3.0).powi(6)).abs() < 1e-12);
    assert!(v["description"].as_str().unwrap().starts_with("Mean: "));
}

#[test]
fn binomial_rejects_non_binary_file() {
    let input = tmp_file("not_binary.txt", "1\n0\n2\n");
    let out = run(&["binomial", "--input", input.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Invalid parameter"), "stderr: {}", stderr);
}

#[test]
fn binomial_reports_parse_line() {
    let input = tmp_file("garbage.txt", "1\noops\n");
    let out = run(&["binomial", "--input", input.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}

#[test]
fn gaussian_sample_and_interval() {
    let input = tmp_file("real.txt", "1\n2\n3\n4\n5\n");
    let out = run(&[
        "gaussian",
        "--input",
        input.to_str().unwrap(),
        "--lower",
        "-1",
        "--upper",
        "3",
        "--at",
        "3",
    ]);
    let v = stdout_json(&out);

    assert_eq!(v["summary"]["mean"], 3.0);
    let std = v["summary"]["std"].as_f64().unwrap();
    assert!((std - 2.5_f64.sqrt()).abs() < 1e-12);
    let prob = v["interval"]["probability"].as_f64().unwrap();
    // P(-2.53 < z < 0) for mean 3, std sqrt(2.5)
    assert!(prob > 0.49 && prob < 0.5, "probability {}", prob);
    assert_eq!(v["pdf"][0]["x"], 3.0);
}

#[test]
fn gaussian_population_defaults_to_full_support() {
    let input = tmp_file("real_pop.txt", "1\n2\n3\n4\n5\n");
    let out = run(&["gaussian", "--input", input.to_str().unwrap(), "--population"]);
    let v = stdout_json(&out);
    let std = v["summary"]["std"].as_f64().unwrap();
    assert!((std - 2.0_f64.sqrt()).abs() < 1e-12);
    assert_eq!(v["interval"]["probability"], 1.0);
}

#[test]
fn curve_series_for_both_families() {
    let binary = tmp_file("curve_binary.txt", "1\n0\n1\n1\n");
    let v = stdout_json(&run(&["curve", "--family", "binomial", "--input", binary.to_str().unwrap()]));
    assert_eq!(v["curve"].as_array().unwrap().len(), 5);
    assert_eq!(v["outcome_counts"]["success"], 3.0);

    let real = tmp_file("curve_real.txt", "0\n10\n5\n");
    let v = stdout_json(&run(&[
        "curve",
        "--family",
        "gaussian",
        "--input",
        real.to_str().unwrap(),
        "--points",
        "5",
    ]));
    let curve = v["curve"].as_array().unwrap();
    assert_eq!(curve.len(), 5);
    assert_eq!(curve[4]["x"], 8.0);
}

#[test]
fn sum_combines_matching_models() {
    let v = stdout_json(&run(&[
        "sum", "--family", "gaussian", "--params", "25,3", "--params", "30,4",
    ]));
    assert_eq!(v["summary"]["mean"], 55.0);
    assert_eq!(v["summary"]["std"], 5.0);

    let v = stdout_json(&run(&[
        "sum", "--family", "binomial", "--params", "20,0.4", "--params", "60,0.4",
    ]));
    assert_eq!(v["summary"]["parameters"]["n"], 80.0);
}

#[test]
fn sum_rejects_mismatched_probabilities() {
    let out = run(&["sum", "--family", "binomial", "--params", "20,0.5", "--params", "60,0.4"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unsupported operation"), "stderr: {}", stderr);
}
