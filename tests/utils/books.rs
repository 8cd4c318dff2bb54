use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

/// FB2 document with one section holding `paragraphs`.
pub fn fb2_document(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", p))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<FictionBook xmlns="http://www.gribuser.ru/xml/fictionbook/2.0">
<description><title-info><book-title>Test</book-title></title-info></description>
<body><section>{}</section></body>
</FictionBook>"#,
        body
    )
}

pub fn write_book(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, fb2_document(paragraphs)).unwrap();
    path
}

pub fn write_zipped_book(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.start_file("cover.jpg", options).unwrap();
    zip.write_all(b"\xff\xd8").unwrap();
    zip.start_file("book.fb2", options).unwrap();
    zip.write_all(fb2_document(paragraphs).as_bytes()).unwrap();
    zip.finish().unwrap();
    path
}
