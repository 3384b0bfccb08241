//! Integration tests over whole documents
//!
//! These tests exercise the full read → parse → shuffle → assemble → write
//! pipeline against real docx packages in a temp directory, then reopen the
//! generated document and check its structure and answer key.

use std::fs;
use std::path::PathBuf;

use quizmix::quiz::docx::{extract_text, write_document, StyledLine};
use quizmix::quiz::parser::parse_document;
use quizmix::quiz::pipeline::{self, OUTPUT_FILE, QUESTIONS_FILE};

/// Create a scratch directory holding a questions.docx with the given lines
fn write_source_document(tag: &str, lines: &[String]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quizmix-it-{}", tag));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch directory");
    let styled: Vec<StyledLine> = lines
        .iter()
        .map(|line| StyledLine::visible(line.as_str()))
        .collect();
    write_document(&dir.join(QUESTIONS_FILE), &styled).expect("write source document");
    dir
}

fn sample_lines(total: usize) -> Vec<String> {
    (1..=total)
        .map(|n| {
            format!(
                "{n}. Sum {n}? A. wrong-{n}a;[*] B. right-{n};[*] = C. wrong-{n}b;[*]"
            )
        })
        .collect()
}

/// Split generated output text into question blocks and answer-key entries
fn split_output(text: &str) -> (Vec<Vec<String>>, Vec<String>) {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    let mut answers = Vec::new();
    let mut in_trailer = false;
    for line in text.lines() {
        if line == "answers:[" {
            in_trailer = true;
            continue;
        }
        if in_trailer {
            if line != "]" {
                answers.push(line.to_string());
            }
            continue;
        }
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line.to_string());
    }
    (blocks, answers)
}

#[test]
fn test_docx_write_read_round_trip() {
    let dir = write_source_document("round-trip", &sample_lines(3));
    let text = extract_text(&dir.join(QUESTIONS_FILE)).expect("extract text");
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|l| l.contains(";[*]")));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_extracted_text_parses_back() {
    let dir = write_source_document("reparse", &sample_lines(4));
    let text = extract_text(&dir.join(QUESTIONS_FILE)).expect("extract text");
    let questions = parse_document(&text);
    assert_eq!(questions.len(), 4);
    for question in &questions {
        assert_eq!(question.choices.len(), 3);
        assert_eq!(question.choices.iter().filter(|c| c.is_correct).count(), 1);
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_selects_requested_count() {
    let dir = write_source_document("select", &sample_lines(6));
    let summary = pipeline::run(&dir, 4).expect("pipeline run");
    assert_eq!(summary.parsed, 6);
    assert_eq!(summary.selected, 4);

    let output = extract_text(&dir.join(OUTPUT_FILE)).expect("extract output");
    let (blocks, answers) = split_output(&output);
    assert_eq!(blocks.len(), 4);
    assert_eq!(answers.len(), 4);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_answer_key_matches_shuffled_letters() {
    let dir = write_source_document("answer-key", &sample_lines(5));
    pipeline::run(&dir, 5).expect("pipeline run");

    let output = extract_text(&dir.join(OUTPUT_FILE)).expect("extract output");
    let (blocks, answers) = split_output(&output);

    for (index, block) in blocks.iter().enumerate() {
        let number = index + 1;
        assert!(block[0].starts_with(&format!("{}. Sum ", number)));

        let entry = &answers[index];
        let expected_prefix = format!("{{Q: {}; A: ", number);
        assert!(
            entry.starts_with(&expected_prefix),
            "unexpected answer entry {:?}",
            entry
        );
        let letter = entry[expected_prefix.len()..]
            .chars()
            .next()
            .expect("answer letter");

        // The keyed option line must be the one carrying the right-* text
        let position = (letter as u8 - b'A') as usize + 1;
        assert!(
            block[position].contains("right-"),
            "letter {} points at {:?} in block {:?}",
            letter,
            block[position],
            block
        );
        // And no other option in the block is the correct one
        for (i, line) in block.iter().enumerate().skip(1) {
            if i != position {
                assert!(!line.contains("right-"), "stray correct option in {:?}", block);
            }
        }
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_with_oversized_count_takes_all_once() {
    let dir = write_source_document("clamp", &sample_lines(3));
    let summary = pipeline::run(&dir, 99).expect("pipeline run");
    assert_eq!(summary.selected, 3);

    let output = extract_text(&dir.join(OUTPUT_FILE)).expect("extract output");
    let (blocks, _) = split_output(&output);
    let mut stems: Vec<&String> = blocks.iter().map(|b| &b[0]).collect();
    stems.sort();
    stems.dedup();
    assert_eq!(stems.len(), 3);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_document_with_only_noise_yields_no_questions() {
    let lines = vec![
        "Midterm exam".to_string(),
        "Answer every question.".to_string(),
    ];
    let dir = write_source_document("noise", &lines);
    let err = pipeline::run(&dir, 3).unwrap_err();
    assert!(matches!(err, pipeline::PipelineError::NoQuestions(_)));
    assert!(!dir.join(OUTPUT_FILE).exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_container_is_a_read_error() {
    let dir = std::env::temp_dir().join("quizmix-it-corrupt");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch directory");
    fs::write(dir.join(QUESTIONS_FILE), b"not a zip archive").expect("write junk");

    let err = pipeline::run(&dir, 3).unwrap_err();
    assert!(matches!(err, pipeline::PipelineError::Read(_)));
    let _ = fs::remove_dir_all(&dir);
}
