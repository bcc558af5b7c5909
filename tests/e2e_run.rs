mod support;

use std::time::{Duration, Instant};

use support::{
    field_u64, json_report, run_loadburst, spawn_http_server_or_skip, unreachable_url_or_skip,
};

fn base_args(url: &str, concurrency: &str, duration: &str) -> Vec<String> {
    vec![
        "-u".to_owned(),
        url.to_owned(),
        "-c".to_owned(),
        concurrency.to_owned(),
        "-d".to_owned(),
        duration.to_owned(),
        "--timeout".to_owned(),
        "5s".to_owned(),
        "--output-format".to_owned(),
        "json".to_owned(),
    ]
}

#[test]
fn e2e_healthy_target_reports_latencies() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip("200 OK")? else {
        return Ok(());
    };

    let output = run_loadburst(base_args(&url, "5", "2"))?;
    let report = json_report(&output)?;

    let total = field_u64(&report, "total")?;
    let errors = field_u64(&report, "errors")?;
    if total == 0 || errors != 0 {
        return Err(format!("Unexpected counts: {}", report));
    }
    let latency = report
        .get("latency")
        .filter(|value| !value.is_null())
        .ok_or_else(|| format!("Expected latency stats in {}", report))?;
    for key in ["avg_ms", "p50_ms", "p90_ms", "p99_ms"] {
        let value = latency
            .get(key)
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| format!("missing {} in {}", key, latency))?;
        if !value.is_finite() || value < 0.0 {
            return Err(format!("Unexpected {}: {}", key, value));
        }
    }
    Ok(())
}

#[test]
fn e2e_unreachable_target_reports_only_errors() -> Result<(), String> {
    let Some(url) = unreachable_url_or_skip()? else {
        return Ok(());
    };

    let output = run_loadburst(base_args(&url, "5", "1"))?;
    let report = json_report(&output)?;

    if field_u64(&report, "total")? != 0 {
        return Err(format!("Expected zero total: {}", report));
    }
    let errors = field_u64(&report, "errors")?;
    if errors == 0 || field_u64(&report, "transport_errors")? != errors {
        return Err(format!("Expected transport errors only: {}", report));
    }
    if report.get("latency").is_some_and(|value| !value.is_null()) {
        return Err(format!("Expected no latency stats: {}", report));
    }
    Ok(())
}

#[test]
fn e2e_server_errors_count_in_total_and_errors() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip("500 Internal Server Error")? else {
        return Ok(());
    };

    let output = run_loadburst(base_args(&url, "3", "1"))?;
    let report = json_report(&output)?;

    let total = field_u64(&report, "total")?;
    if total == 0 || field_u64(&report, "errors")? != total {
        return Err(format!("Expected total == errors > 0: {}", report));
    }
    if field_u64(&report, "transport_errors")? != 0 {
        return Err(format!("Expected no transport errors: {}", report));
    }
    Ok(())
}

#[test]
fn e2e_text_summary_without_samples_exits_zero() -> Result<(), String> {
    let Some(url) = unreachable_url_or_skip()? else {
        return Ok(());
    };

    let output = run_loadburst(["-u", url.as_str(), "-c", "2", "-d", "1"])?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() {
        return Err(format!("Expected exit 0, stdout: {}", stdout));
    }
    let banner = format!("Starting load test: concurrency=2, duration=1s, base={}\n", url);
    if !stdout.contains(&banner) {
        return Err(format!("Missing banner '{}' in:\n{}", banner.trim_end(), stdout));
    }
    for needle in [
        "=== Load test summary ===",
        "Total requests: 0",
        "Latency ms: no samples",
    ] {
        if !stdout.contains(needle) {
            return Err(format!("Missing '{}' in:\n{}", needle, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_run_finishes_near_deadline() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip("200 OK")? else {
        return Ok(());
    };

    let started = Instant::now();
    let output = run_loadburst(base_args(&url, "4", "1"))?;
    let elapsed = started.elapsed();
    json_report(&output)?;

    if elapsed < Duration::from_secs(1) {
        return Err(format!("Run ended before its deadline: {:?}", elapsed));
    }
    if elapsed > Duration::from_secs(1 + 5 + 2) {
        return Err(format!("Run overran deadline plus timeout: {:?}", elapsed));
    }
    Ok(())
}

#[test]
fn e2e_invalid_configuration_fails_before_running() -> Result<(), String> {
    let cases: [&[&str]; 3] = [
        &["-c", "0"],
        &["-d", "0"],
        &["-u", "not a url", "-d", "1"],
    ];
    for args in cases {
        let output = run_loadburst(args)?;
        if output.status.success() {
            return Err(format!("Expected failure for {:?}", args));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.contains("Load test summary") {
            return Err(format!("Run started for {:?}: {}", args, stdout));
        }
    }
    Ok(())
}

#[test]
fn e2e_config_file_supplies_endpoints() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip("404 Not Found")? else {
        return Ok(());
    };
    let dir = tempfile::tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("run.toml");
    let content = format!(
        "url = \"{}\"\nconcurrency = 2\nduration = 1\noutput_format = \"json\"\n\n[[endpoints]]\nmethod = \"POST\"\npath = \"/checkout/\"\n",
        url
    );
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let output = run_loadburst(["--config".as_ref(), path.as_os_str()])?;
    let report = json_report(&output)?;

    if field_u64(&report, "concurrency")? != 2 {
        return Err(format!("Config concurrency not applied: {}", report));
    }
    let total = field_u64(&report, "total")?;
    if total == 0 || field_u64(&report, "errors")? != total {
        return Err(format!("Expected every 404 to count as an error: {}", report));
    }
    Ok(())
}
