//! Attachments built from referenced files.

use super::fileref::FileContent;
use serde::Serialize;
use std::path::{Path, PathBuf};

const SNIFF_LEN: usize = 512;
const GENERIC_BINARY: &str = "application/octet-stream";
const DEFAULT_TEXT: &str = "text/plain";

/// A referenced file passed alongside the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    #[serde(skip)]
    pub content: Vec<u8>,
}

impl Attachment {
    pub fn new(path: PathBuf, content: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = detect_mime(&path, &content).to_string();

        Self {
            path,
            file_name,
            mime_type,
            content,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Turn successful reads into attachments. Empty files are skipped.
pub fn build_attachments(contents: Vec<FileContent>) -> Vec<Attachment> {
    contents
        .into_iter()
        .filter_map(|file| match file.content {
            Ok(bytes) if !bytes.is_empty() => Some(Attachment::new(file.path, bytes)),
            _ => None,
        })
        .collect()
}

/// Content type from leading bytes, then extension, then plain text.
pub fn detect_mime(path: &Path, data: &[u8]) -> &'static str {
    let sniffed = sniff(data);
    if sniffed != GENERIC_BINARY {
        return sniffed;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .unwrap_or(DEFAULT_TEXT)
}

fn sniff(data: &[u8]) -> &'static str {
    let data = &data[..data.len().min(SNIFF_LEN)];

    if data.starts_with(b"%PDF-") {
        return "application/pdf";
    }

    // -- Images --

    if data.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return "image/png";
    }
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return "image/gif";
    }
    if data.len() >= 12 && data[..4] == *b"RIFF" && data[8..12] == *b"WEBP" {
        return "image/webp";
    }

    // -- Archives --

    if data.starts_with(b"PK\x03\x04") {
        return "application/zip";
    }
    if data.starts_with(&[0x1F, 0x8B, 0x08]) {
        return "application/x-gzip";
    }

    // -- Markup --

    let trimmed = trim_leading_whitespace(data);
    if starts_with_ignore_case(trimmed, b"<!DOCTYPE HTML") || starts_with_ignore_case(trimmed, b"<html") {
        return "text/html; charset=utf-8";
    }
    if trimmed.starts_with(b"<?xml") {
        return "text/xml; charset=utf-8";
    }

    if data.iter().any(|&b| is_binary_byte(b)) {
        GENERIC_BINARY
    } else {
        "text/plain; charset=utf-8"
    }
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "md" | "markdown" => "text/markdown",
        "txt" | "log" => "text/plain",
        "json" => "application/json",
        "yaml" | "yml" => "application/yaml",
        "toml" => "application/toml",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "js" | "mjs" => "text/javascript",
        "ts" => "text/typescript",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "wasm" => "application/wasm",
        _ => return None,
    };
    Some(mime)
}

fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

fn trim_leading_whitespace(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !matches!(b, b'\t' | b'\n' | b'\x0C' | b'\r' | b' '))
        .unwrap_or(data.len());
    &data[start..]
}

fn starts_with_ignore_case(data: &[u8], prefix: &[u8]) -> bool {
    data.len() >= prefix.len() && data[..prefix.len()].eq_ignore_ascii_case(prefix)
}
