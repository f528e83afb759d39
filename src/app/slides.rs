//! Slide content for the playground.
//!
//! A deck file is plain text; slides are separated by a line holding only
//! `---`.  The first non-empty line of each slide is its title.

use std::path::Path;

use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub body: Vec<String>,
}

impl Slide {
    /// Rows the slide needs when fully expanded (title + gap + body).
    pub fn natural_rows(&self) -> u16 {
        u16::try_from(self.body.len() + 2).unwrap_or(u16::MAX)
    }
}

pub fn load(path: &Path) -> anyhow::Result<Vec<Slide>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading slides from {}", path.display()))?;
    Ok(parse(&text))
}

pub fn parse(text: &str) -> Vec<Slide> {
    let mut slides = Vec::new();
    let mut chunk: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim() == "---" {
            slides.extend(from_chunk(&chunk));
            chunk.clear();
        } else {
            chunk.push(line);
        }
    }
    slides.extend(from_chunk(&chunk));
    slides
}

fn from_chunk(lines: &[&str]) -> Option<Slide> {
    let start = lines.iter().position(|l| !l.trim().is_empty())?;
    let title = lines[start].trim().trim_start_matches('#').trim().to_string();
    let mut body: Vec<String> = lines[start + 1..]
        .iter()
        .map(|l| l.trim_end().to_string())
        .collect();
    while body.first().is_some_and(|l| l.is_empty()) {
        body.remove(0);
    }
    while body.last().is_some_and(|l| l.is_empty()) {
        body.pop();
    }
    Some(Slide { title, body })
}

/// Generated deck used when no file is given.
pub fn demo(count: usize) -> Vec<Slide> {
    (1..=count)
        .map(|n| Slide {
            title: format!("Slide {n} of {count}"),
            body: (0..n + 2)
                .map(|row| match row {
                    0 => "Drag with the mouse, use the wheel, or the arrow keys.".to_string(),
                    1 => "Scroll the page while expanded to dismiss the panel.".to_string(),
                    _ => format!("Detail line {}", row - 1),
                })
                .collect(),
        })
        .collect()
}
