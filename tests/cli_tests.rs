use std::fs;
use std::path::Path;

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Creates a working directory holding the two fixed-name template files.
fn setup_workdir() -> Result<tempfile::TempDir> {
  let temp_dir = tempdir()?;

  fs::write(temp_dir.path().join("license_header"), "// LICENSE\n")?;
  fs::write(temp_dir.path().join("modelines.txt"), "// MODELINE\n")?;

  Ok(temp_dir)
}

fn run_in(dir: &Path) -> Command {
  let mut cmd = Command::cargo_bin("apply-boilerplate").expect("binary built");
  cmd.current_dir(dir);
  cmd
}

#[test]
fn test_updates_then_reports_ok() -> Result<()> {
  let temp_dir = setup_workdir()?;
  fs::write(temp_dir.path().join("a.rb"), "puts 1\n")?;

  run_in(temp_dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("./a.rb updated"));

  assert_eq!(
    fs::read_to_string(temp_dir.path().join("a.rb"))?,
    "# LICENSE\nputs 1\n# MODELINE\n"
  );

  // Second run must leave the file byte-identical and report it as ok
  run_in(temp_dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("./a.rb is ok"));

  assert_eq!(
    fs::read_to_string(temp_dir.path().join("a.rb"))?,
    "# LICENSE\nputs 1\n# MODELINE\n"
  );

  Ok(())
}

#[test]
fn test_missing_license_template_is_fatal() -> Result<()> {
  let temp_dir = tempdir()?;
  fs::write(temp_dir.path().join("modelines.txt"), "// MODELINE\n")?;

  run_in(temp_dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to read license template file"));

  Ok(())
}

#[test]
fn test_missing_modelines_template_is_fatal() -> Result<()> {
  let temp_dir = tempdir()?;
  fs::write(temp_dir.path().join("license_header"), "// LICENSE\n")?;

  run_in(temp_dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to read modelines template file"));

  Ok(())
}

#[test]
fn test_unrecognized_files_produce_no_status_line() -> Result<()> {
  let temp_dir = setup_workdir()?;
  fs::write(temp_dir.path().join("script.py"), "print(1)\n")?;

  run_in(temp_dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("script.py").not());

  assert_eq!(fs::read_to_string(temp_dir.path().join("script.py"))?, "print(1)\n");

  Ok(())
}

#[test]
fn test_template_files_themselves_are_skipped() -> Result<()> {
  let temp_dir = setup_workdir()?;

  // license_header has no extension and modelines.txt has an unrecognized
  // one; neither may be rewritten or reported
  run_in(temp_dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("license_header").not())
    .stdout(predicate::str::contains("modelines.txt").not());

  assert_eq!(
    fs::read_to_string(temp_dir.path().join("license_header"))?,
    "// LICENSE\n"
  );
  assert_eq!(
    fs::read_to_string(temp_dir.path().join("modelines.txt"))?,
    "// MODELINE\n"
  );

  Ok(())
}

#[test]
fn test_nested_files_reported_with_relative_path() -> Result<()> {
  let temp_dir = setup_workdir()?;
  fs::create_dir(temp_dir.path().join("src"))?;
  fs::write(temp_dir.path().join("src/boot.s"), "mov eax, 1\n")?;

  run_in(temp_dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("./src/boot.s updated"));

  let content = fs::read_to_string(temp_dir.path().join("src/boot.s"))?;
  assert!(content.starts_with("; LICENSE\n"));
  assert!(content.ends_with("; MODELINE\n"));

  Ok(())
}

#[test]
fn test_status_lines_follow_sibling_sort_order() -> Result<()> {
  let temp_dir = setup_workdir()?;
  fs::write(temp_dir.path().join("zz.c"), "int z;\n")?;
  fs::write(temp_dir.path().join("aa.c"), "int a;\n")?;

  let output = run_in(temp_dir.path()).assert().success();
  let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

  let aa = stdout.find("./aa.c updated").expect("aa.c line present");
  let zz = stdout.find("./zz.c updated").expect("zz.c line present");
  assert!(aa < zz);

  Ok(())
}

#[test]
fn test_mixed_tree_end_to_end() -> Result<()> {
  let temp_dir = setup_workdir()?;
  fs::create_dir(temp_dir.path().join("kernel"))?;
  fs::write(temp_dir.path().join("kernel/entry.cpp"), "int main() {}\n")?;
  fs::write(
    temp_dir.path().join("kernel/irq.s"),
    "; LICENSE\niret\n; MODELINE\n",
  )?;
  fs::write(temp_dir.path().join("rakefile.rb"), "task :default\n")?;

  run_in(temp_dir.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("./kernel/entry.cpp updated"))
    .stdout(predicate::str::contains("./kernel/irq.s is ok"))
    .stdout(predicate::str::contains("./rakefile.rb updated"));

  // The already-complete assembly file keeps its exact bytes
  assert_eq!(
    fs::read_to_string(temp_dir.path().join("kernel/irq.s"))?,
    "; LICENSE\niret\n; MODELINE\n"
  );

  Ok(())
}
