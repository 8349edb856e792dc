use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Contract tests for `trainctl launch`
///
/// The launch flow probes a real Python interpreter; those tests are
/// skipped when none is on PATH.

fn python_on_path() -> bool {
    ["python3", "python"].iter().any(|name| {
        std::process::Command::new(name)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    })
}

const LAUNCH_SUMMARY: &str = "Running single-process training with command:";

#[test]
fn test_launch_declined_prints_no_summary() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--packages", "os,sys"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single-Process Training Setup"))
        .stdout(predicate::str::contains("Do you want to run the training now? (y/n):"))
        .stdout(predicate::str::contains(LAUNCH_SUMMARY).not());
}

#[test]
fn test_launch_arbitrary_input_counts_as_decline() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--packages", "os"])
        .write_stdin("maybe later\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(LAUNCH_SUMMARY).not());
}

#[test]
fn test_launch_confirmed_prints_summary_once() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--packages", "os,sys"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.matches(LAUNCH_SUMMARY).count() == 1
        }))
        .stdout(predicate::str::contains("--batch_size 8"))
        .stdout(predicate::str::contains("--name SingleProcess_Exp"));
}

#[test]
fn test_launch_uppercase_confirmation_accepted() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--packages", "os"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(LAUNCH_SUMMARY));
}

#[test]
fn test_launch_yes_skips_prompt() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--yes", "--packages", "os"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to run the training now?").not())
        .stdout(predicate::str::contains(LAUNCH_SUMMARY));
}

#[test]
fn test_launch_stops_on_missing_packages() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--packages", "os,trainctl_no_such_module"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Missing required packages: trainctl_no_such_module",
        ))
        .stdout(predicate::str::contains("pip install trainctl_no_such_module"))
        .stdout(predicate::str::contains("Do you want to run the training now?").not())
        .stdout(predicate::str::contains(LAUNCH_SUMMARY).not());
}

#[test]
fn test_launch_explains_configuration_changes() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--yes", "--packages", "os"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed distributed training (DDP, DistributedSampler)",
        ))
        .stdout(predicate::str::contains("Removed multiprocessing (num_workers=0)"))
        .stdout(predicate::str::contains(
            "First process your data using data_process.py",
        ));
}

#[test]
fn test_launch_overrides_applied_to_command() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args([
            "launch",
            "--yes",
            "--packages",
            "os",
            "--train-set",
            "data/train",
            "--valid-set",
            "data/valid",
            "--device",
            "cpu",
            "--name",
            "override_run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("--train_set data/train"))
        .stdout(predicate::str::contains("--valid_set data/valid"))
        .stdout(predicate::str::contains("--device cpu"))
        .stdout(predicate::str::contains("--name override_run"));
}

#[test]
fn test_launch_invalid_name_override_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--yes", "--name", "bad name"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid experiment name 'bad name'"))
        .stderr(predicate::str::contains(
            "Valid names contain only letters, digits, '-' and '_'",
        ));
}

#[test]
fn test_launch_run_executes_training_script() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("train.py");
    fs::write(&script, "print(\"TRAINING STARTED\")\n").unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--yes", "--run", "--packages", "os"])
        .assert()
        .success()
        .stdout(predicate::str::contains(LAUNCH_SUMMARY))
        .stdout(predicate::str::contains("TRAINING STARTED"))
        .stdout(predicate::str::contains("Training finished successfully."));
}

#[test]
fn test_launch_run_fails_when_script_missing() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--yes", "--run", "--packages", "os"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("train.py not found"));
}

#[test]
fn test_launch_run_reports_nonzero_exit() {
    if !python_on_path() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("train.py");
    fs::write(&script, "import sys\nsys.exit(3)\n").unwrap();

    let mut cmd = Command::cargo_bin("trainctl").unwrap();
    cmd.current_dir(&temp_dir)
        .args(["launch", "--yes", "--run", "--packages", "os"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Training failed with exit code 3"));
}
