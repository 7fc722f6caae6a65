// PDF report export via lopdf.
//
// The report is a fixed-layout A4 document: a bold title line, then one field
// per line at fixed vertical offsets. Long keyword lists wrap, and a new page
// starts when the current one is full. Only the two standard Helvetica fonts
// are referenced, so nothing needs embedding.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::error::AnalysisError;

use super::{wrap_line, NO_MISSING_REPORT};

/// A4 in PDF points.
pub const PAGE_WIDTH: i64 = 595;
pub const PAGE_HEIGHT: i64 = 842;

pub const REPORT_TITLE: &str = "Resume vs Job Description Analysis Report";

const TITLE_X: i64 = 100;
const TITLE_OFFSET: i64 = 80;
const TITLE_SIZE: i64 = 16;
const BODY_X: i64 = 80;
const BODY_OFFSET: i64 = 120;
const BODY_SIZE: i64 = 12;
const LINE_HEIGHT: i64 = 20;
const BOTTOM_MARGIN: i64 = 60;
/// Characters per body line; Helvetica 12pt averages ~5.5pt per glyph.
const WRAP_CHARS: usize = 80;

/// Body lines per page, counting the first line at the top offset.
pub fn lines_per_page() -> usize {
    ((PAGE_HEIGHT - BODY_OFFSET - BOTTOM_MARGIN) / LINE_HEIGHT + 1) as usize
}

/// The report's logical lines, before wrapping.
pub fn report_lines(result: &AnalysisResult, generated_at: &str) -> Vec<String> {
    let missing = if result.is_full_match() {
        NO_MISSING_REPORT.to_string()
    } else {
        result.missing_keywords.joined()
    };
    let overlap = result.overlap();

    vec![
        format!("Similarity Score: {:.2}%", result.similarity),
        String::new(),
        format!("Job Description Keywords: {}", result.job_keywords.joined()),
        String::new(),
        format!("Resume Keywords: {}", result.resume_keywords.joined()),
        String::new(),
        format!("Missing Keywords in Resume: {missing}"),
        String::new(),
        format!(
            "Keyword Overlap: {} shared, {} only in job description, {} only in resume",
            overlap.overlap, overlap.only_job, overlap.only_resume
        ),
        String::new(),
        format!("Generated: {generated_at}"),
    ]
}

/// Wrap the logical lines and split them into pages.
pub fn paginate(lines: &[String]) -> Vec<Vec<String>> {
    let wrapped: Vec<String> = lines
        .iter()
        .flat_map(|line| wrap_line(line, WRAP_CHARS))
        .collect();

    wrapped
        .chunks(lines_per_page())
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Build the report document in memory.
pub fn build_document(result: &AnalysisResult, generated_at: &str) -> lopdf::Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let body_font = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let title_font = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => body_font,
            "F2" => title_font,
        },
    });

    let pages = paginate(&report_lines(result, generated_at));
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for (index, lines) in pages.iter().enumerate() {
        let mut operations = Vec::new();
        if index == 0 {
            operations.extend(text_operations(
                "F2",
                TITLE_SIZE,
                TITLE_X,
                PAGE_HEIGHT - TITLE_OFFSET,
                REPORT_TITLE,
            ));
        }

        let mut y = PAGE_HEIGHT - BODY_OFFSET;
        for line in lines {
            if !line.is_empty() {
                operations.extend(text_operations("F1", BODY_SIZE, BODY_X, y, line));
            }
            y -= LINE_HEIGHT;
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = add_page(&mut doc, pages_id, content_id);
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH),
                Object::Integer(PAGE_HEIGHT),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

fn add_page(doc: &mut Document, pages_id: ObjectId, content_id: ObjectId) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    })
}

fn text_operations(font: &str, size: i64, x: i64, y: i64, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), Object::Integer(size)],
        ),
        Operation::new("Td", vec![Object::Integer(x), Object::Integer(y)]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// Write the report to `path`, returning the number of pages written.
pub fn export_report(result: &AnalysisResult, path: &Path) -> Result<usize, AnalysisError> {
    let export_error = |message: String| AnalysisError::Export {
        path: path.to_path_buf(),
        message,
    };

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let mut doc = build_document(result, &generated_at).map_err(|e| export_error(e.to_string()))?;
    let page_count = doc.get_pages().len();

    doc.save(path).map_err(|e| export_error(e.to_string()))?;

    info!(path = %path.display(), pages = page_count, "Report exported");
    Ok(page_count)
}
