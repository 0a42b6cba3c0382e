use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn grafo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grafo"))
        .args(args)
        .output()
        .expect("run grafo")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "grafo failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("utf8")
}

fn write(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn toposort_prints_an_order() {
    let tmp = tempdir().unwrap();
    let input = write(tmp.path(), "dag.dgr", "1>2>3\n1>4>3\n");
    let text = stdout(&grafo(&["toposort", &input]));
    let order: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(order.len(), 4);
    assert_eq!(order[0], "1");
    assert_eq!(order[3], "3");
}

#[test]
fn toposort_fails_on_cycles_and_undirected_input() {
    let tmp = tempdir().unwrap();
    let cyclic = write(tmp.path(), "cycle.dgr", "1>2>3>1\n");
    assert!(!grafo(&["toposort", &cyclic]).status.success());
    let undirected = write(tmp.path(), "plain.ugr", "1-2\n");
    assert!(!grafo(&["toposort", &undirected]).status.success());
}

#[test]
fn reduce_drops_shortcuts() {
    let tmp = tempdir().unwrap();
    let input = write(tmp.path(), "short.dgr", "1>2>3\n1>3\n7\n");
    let text = stdout(&grafo(&["reduce", &input]));
    assert_eq!(text, "1>2\n2>3\n7\n");

    let limited = stdout(&grafo(&["reduce", &input, "--max-length", "1"]));
    assert!(limited.contains("1>3\n"));
}

#[test]
fn split_writes_components() {
    let tmp = tempdir().unwrap();
    let input = write(tmp.path(), "two.ugr", "1-2-3\n4-5\n");
    let out_dir = tmp.path().join("parts");
    stdout(&grafo(&[
        "split",
        &input,
        "--out-dir",
        &out_dir.to_string_lossy(),
    ]));
    let first = fs::read_to_string(out_dir.join("component_000.ugr")).unwrap();
    let second = fs::read_to_string(out_dir.join("component_001.ugr")).unwrap();
    assert_eq!(first, "1-2\n2-3\n");
    assert_eq!(second, "4-5\n");

    let text = stdout(&grafo(&["split", &input]));
    assert!(text.starts_with("# component 0\n"));
    assert!(text.contains("# component 1\n4-5\n"));
}

#[test]
fn path_reports_distance_and_paths() {
    let tmp = tempdir().unwrap();
    let input = write(tmp.path(), "net.mgr", "1>2>3\n1-4\n4>3\n");
    assert_eq!(stdout(&grafo(&["path", &input, "--from", "1", "--to", "3"])), "2\n");
    assert_eq!(
        stdout(&grafo(&["path", &input, "--from", "3", "--to", "1"])),
        "unreachable\n"
    );
    let all = stdout(&grafo(&["path", &input, "--from", "1", "--to", "3", "--all"]));
    let mut lines: Vec<&str> = all.lines().collect();
    lines.sort();
    assert_eq!(lines, vec!["1 2 3", "1 4 3"]);

    let dag = write(tmp.path(), "dag.dgr", "1>2>3>4\n1>3\n");
    assert_eq!(
        stdout(&grafo(&["path", &dag, "--from", "1", "--to", "4", "--shortest"])),
        "1 3 4\n"
    );
}

#[test]
fn dot_uses_config_file() {
    let tmp = tempdir().unwrap();
    let input = write(tmp.path(), "edges.txt", "1-2\n");
    let config = write(
        tmp.path(),
        "grafo.yaml",
        "graph:\n  kind: undirected\n  storage:\n    backend: matrix\n    capacity: 2\ndot:\n  name: demo\n  labels: false\n",
    );
    let text = stdout(&grafo(&["--config", &config, "dot", &input]));
    assert_eq!(text, "graph demo {\nn1[];\nn2[];\nn1--n2[dir=\"both\"];\n}\n");

    let arcs = write(tmp.path(), "arcs.txt", "1>2\n");
    let text = stdout(&grafo(&["dot", &arcs, "--kind", "directed", "--name", "g"]));
    assert!(text.starts_with("digraph g {\n"));
    assert!(text.contains("n1->n2[];\n"));
}

#[test]
fn parse_errors_name_the_line() {
    let tmp = tempdir().unwrap();
    let input = write(tmp.path(), "bad.dgr", "1>2\n2>zz\n");
    let output = grafo(&["toposort", &input]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(r#""line_number": "2""#), "stderr: {stderr}");
    assert!(stderr.contains(r#""chunk": "zz""#), "stderr: {stderr}");
}

#[test]
fn oversized_capacity_is_rejected() {
    let tmp = tempdir().unwrap();
    let input = write(tmp.path(), "small.ugr", "1-2\n");
    let capacity = usize::MAX.to_string();
    let output = grafo(&["dot", &input, "--capacity", &capacity]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("matrix capacity cannot be allocated"), "stderr: {stderr}");
    assert!(stderr.contains(&format!(r#""capacity": "{capacity}""#)), "stderr: {stderr}");
}
