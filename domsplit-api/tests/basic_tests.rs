//! Basic tests for domsplit-api

use domsplit_api::*;
use std::io::Write;

#[test]
fn test_input_text_processing() {
    let input = Input::Text("domain\nbestpizza.com\n\nmygptapp.io\n".to_string());
    let domains = input.read_domains().unwrap();
    assert_eq!(domains, vec!["bestpizza.com", "mygptapp.io"]);
}

#[test]
fn test_config_presets() {
    assert_eq!(
        Config::sequential().engine().execution_mode,
        domsplit_engine::ExecutionMode::Sequential
    );
    assert!(Config::fast().engine().parallel_threshold < Config::default().engine().parallel_threshold);
}

#[test]
fn test_process_domains_convenience() {
    let output = process_domains(["bestpizza.com", "xq7z9.net", "mygptapp.io"]).unwrap();

    assert_eq!(output.results.len(), 3);
    assert_eq!(output.results[0].converted, "bestPizza.com");
    assert_eq!(output.results[0].split, "best pizza");
    assert_eq!(output.results[0].confidence, 100);
    assert_eq!(output.results[1].converted, "xq7z9.net");
    assert_eq!(output.results[1].confidence, 0);
    assert_eq!(output.results[2].converted, "myGPTApp.io");
    assert_eq!(output.summary.total_domains, 3);
    assert_eq!(output.metadata.lexicon, "en");
}

#[test]
fn test_process_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "domain,notes").unwrap();
    writeln!(file, "aiapp.com,launch").unwrap();
    writeln!(file, "bestpizza.co.uk,").unwrap();

    let output = process_file(file.path()).unwrap();
    assert_eq!(output.results.len(), 2);
    assert_eq!(output.results[0].converted, "AIApp.com");
    assert_eq!(output.results[1].converted, "bestPizza.co.uk");
    assert_eq!(output.results[1].tld, "co.uk");
}

#[test]
fn test_missing_file() {
    let err = process_file("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}

#[test]
fn test_unknown_lexicon() {
    let err = DomainProcessor::with_lexicon("xx").unwrap_err();
    assert!(matches!(err, ApiError::UnknownLexicon(_)));
}

#[test]
fn test_external_lexicon_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[metadata]
code = "coffee"
name = "Coffee"

[acronyms]
entries = ["nyc"]

[[tiers]]
name = "core"
words = ["coffee", "bean", "roast"]
"#
    )
    .unwrap();

    let config = Config::builder().lexicon_file(file.path()).build().unwrap();
    let processor = DomainProcessor::with_config(config).unwrap();
    assert_eq!(processor.lexicon().code(), "coffee");

    let result = processor.convert("nyccoffeeroast.com");
    assert_eq!(result.converted, "NYCCoffeeRoast.com");
    assert_eq!(result.confidence, 100);
}

#[test]
fn test_segment() {
    let processor = DomainProcessor::new().unwrap();
    let scored = processor.segment("seotools");
    assert_eq!(scored.segmentation.split_text(), "seo tools");
    assert_eq!(scored.segmentation.tokens()[0].source, TokenSource::Acronym);
    assert_eq!(scored.confidence, 100);
}

#[test]
fn test_edit_then_output() {
    let processor = DomainProcessor::new().unwrap();
    let batch = processor
        .process_batch(Input::from_domains(["bestpizza.com", "xq7z9.net"]))
        .unwrap();

    let shared = SharedBatch::new(batch);
    shared.mark_reviewed(1).unwrap();
    shared.apply_manual_split_text(0, "bestpizza").unwrap();

    // Row 0 is now one unmatched token and waits for review
    let output = processor.output_for(&shared.snapshot().unwrap());
    assert_eq!(output.summary.pending_review, 1);
    assert_eq!(output.results[0].confidence, 0);
    assert!(output.results[1].reviewed);
    assert_eq!(output.results[0].split, "bestpizza");
    assert_eq!(output.results[0].word_count, 1);
}

#[test]
fn test_modes_agree() {
    let processor = DomainProcessor::new().unwrap();
    let domains: Vec<String> = (0..40).map(|i| format!("cloudshop{i}.io")).collect();

    let mut sequential = processor
        .process_with_mode(Input::from_domains(domains.clone()), ExecutionMode::Sequential)
        .unwrap();
    let mut parallel = processor
        .process_with_mode(Input::from_domains(domains), ExecutionMode::Parallel)
        .unwrap();

    sequential.metadata = Metadata::default();
    parallel.metadata = Metadata::default();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_mode_used_is_resolved() {
    let processor = DomainProcessor::with_config(Config::sequential()).unwrap();

    let adaptive = processor
        .process_with_mode(Input::from_domains(["bestpizza.com"]), ExecutionMode::Adaptive)
        .unwrap();
    assert_eq!(adaptive.metadata.mode_used, "Sequential");

    let parallel = processor
        .process_with_mode(Input::from_domains(["bestpizza.com"]), ExecutionMode::Parallel)
        .unwrap();
    assert_eq!(parallel.metadata.mode_used, "Parallel");

    let configured = processor
        .process(Input::from_domains(["bestpizza.com"]))
        .unwrap();
    assert_eq!(configured.metadata.mode_used, "Sequential");
}

#[test]
#[cfg(feature = "serde")]
fn test_wire_format() {
    let output = process_domains(["bestpizza.com"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output.to_json(false).unwrap()).unwrap();

    let result = &json["results"][0];
    for field in ["original", "converted", "split", "word_count", "confidence", "sld_length"] {
        assert!(result.get(field).is_some(), "missing {field}");
    }
    assert_eq!(result["converted"], "bestPizza.com");
    assert_eq!(result["confidence"], 100);

    assert_eq!(json["word_stats"][0]["word"], "best");
    assert_eq!(json["sld_stats"][0]["length"], 9);
    assert_eq!(json["tld_stats"][0]["tld"], "com");
    assert!(json["word_cloud"][0].get("text").is_some());
    assert!(json["word_cloud"][0].get("size").is_some());
}

#[test]
#[cfg(feature = "serde")]
fn test_output_round_trip() {
    let output = process_domains(["mygptapp.io", "nodot"]).unwrap();
    let json = output.to_json(true).unwrap();
    let parsed: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, output);
}
