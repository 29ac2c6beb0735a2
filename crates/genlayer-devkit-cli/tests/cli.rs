use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("genlayer").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path()).args(["init", "demo"]).assert().success();
    tmp
}

#[test]
fn templates_lists_catalog() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path())
        .arg("templates")
        .assert()
        .success()
        .stdout(contains("oracle"))
        .stdout(contains("insurance"))
        .stdout(contains("lending"))
        .stdout(contains("basic-storage"))
        .stdout(contains("get_cached_price"));
}

#[test]
fn init_creates_project_layout() {
    let tmp = project();
    let root = tmp.path().join("demo");
    for dir in ["contracts", "tests", "scripts", "docs"] {
        assert!(root.join(dir).is_dir(), "{dir} missing");
    }
    let config: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(root.join("genlayer.json")).unwrap()).unwrap();
    assert_eq!(config["project_name"], "demo");
    assert_eq!(config["genlayer_version"], "1.0");
    assert_eq!(config["networks"]["testnet"]["network_id"], "testnet");

    let sample = fs::read_to_string(root.join("contracts/MyContract.py")).unwrap();
    assert!(sample.contains("class MyContract(gl.Contract):"));
}

#[test]
fn init_refuses_existing_directory() {
    let tmp = project();
    cmd(tmp.path())
        .args(["init", "demo"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn init_unknown_template_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path())
        .args(["init", "demo", "--template", "nft"])
        .assert()
        .failure()
        .stderr(contains("unknown template: nft"));
    assert!(!tmp.path().join("demo").exists());
}

#[test]
fn generate_then_test_passes() {
    let tmp = project();
    let root = tmp.path().join("demo");
    cmd(&root)
        .args(["generate", "--type", "oracle", "--name", "PriceFeed", "--param", "quote_currency=EUR"])
        .assert()
        .success();

    let path = root.join("contracts/PriceFeed.py");
    let source = fs::read_to_string(&path).unwrap();
    assert!(source.contains("class PriceFeed(gl.Contract):"));
    assert!(source.contains("in EUR?"));

    cmd(&root)
        .args(["test", "contracts/PriceFeed.py", "contracts/MyContract.py"])
        .assert()
        .success()
        .stdout(contains("All contracts passed"));
}

#[test]
fn generate_refuses_overwrite_without_force() {
    let tmp = project();
    let root = tmp.path().join("demo");
    let args = ["generate", "--type", "basic", "--name", "Store"];
    cmd(&root).args(args).assert().success();
    cmd(&root).args(args).assert().failure().stderr(contains("--force"));
    cmd(&root).args(args).arg("--force").assert().success();
}

#[test]
fn generate_unknown_archetype_fails() {
    let tmp = project();
    let root = tmp.path().join("demo");
    cmd(&root)
        .args(["generate", "--type", "nft", "--name", "X"])
        .assert()
        .failure()
        .stderr(contains("unknown template"));
    assert!(!root.join("contracts/X.py").exists());
}

#[test]
fn generate_rejects_invalid_name() {
    let tmp = project();
    let root = tmp.path().join("demo");
    cmd(&root)
        .args(["generate", "--type", "lending", "--name", "my-pool"])
        .assert()
        .failure()
        .stderr(contains("contract_name"));
    assert!(!root.join("contracts/my-pool.py").exists());
}

#[test]
fn test_reports_syntax_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Broken.py"),
        "class Broken(gl.Contract):\n    def __init__(self):\n        self.data = {\n",
    )
    .unwrap();
    cmd(tmp.path())
        .args(["test", "Broken.py"])
        .assert()
        .failure()
        .stderr(contains("invalid-syntax"));
}

#[test]
fn test_reports_structure_errors_as_json() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Plain.py"), "class Plain:\n    pass\n").unwrap();
    let assert = cmd(tmp.path())
        .args(["test", "--json", "Plain.py"])
        .assert()
        .failure();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let reports: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reports[0]["accepted"], false);
    let rules: Vec<&str> = reports[0]["report"]["findings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["rule"].as_str().unwrap())
        .collect();
    assert!(rules.contains(&"missing-contract"));
    assert!(!rules.contains(&"missing-constructor"));
    assert!(!rules.contains(&"no-public-methods"));
}

#[test]
fn python2_print_is_a_syntax_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("Legacy.py"),
        "class Legacy(gl.Contract):\n    def __init__(self):\n        print \"ready\"\n",
    )
    .unwrap();
    cmd(tmp.path())
        .args(["test", "Legacy.py"])
        .assert()
        .failure()
        .stderr(contains("invalid-syntax"))
        .stderr(contains("'print'"));
}

#[test]
fn test_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path())
        .args(["test", "Nope.py"])
        .assert()
        .failure()
        .stderr(contains("Nope.py"));
}

#[test]
fn deploy_prints_instructions() {
    let tmp = project();
    let root = tmp.path().join("demo");
    cmd(&root)
        .args(["deploy", "contracts/MyContract.py", "--network", "mainnet"])
        .assert()
        .success()
        .stdout(contains("https://rpc.mainnet.genlayer.com"))
        .stdout(contains("Code hash (sha256)"))
        .stdout(contains("studio.genlayer.com"));
}

#[test]
fn deploy_unknown_network_is_fatal() {
    let tmp = project();
    let root = tmp.path().join("demo");
    cmd(&root)
        .args(["deploy", "contracts/MyContract.py", "--network", "devnet"])
        .assert()
        .failure()
        .stderr(contains("unknown network: devnet"));
}

#[test]
fn status_prints_studio_link() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path())
        .args(["status", "0x5FbDB2315678afecb367f032d93F642f64180aa3"])
        .assert()
        .success()
        .stdout(contains(
            "https://studio.genlayer.com/contracts/0x5FbDB2315678afecb367f032d93F642f64180aa3",
        ));
}
