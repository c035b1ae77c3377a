use crate::models::document::Document;

/// Builds the `/generate` query asking for a legal analysis of one document.
pub fn build_summary_prompt(doc: &Document) -> String {
    let title = doc.title.as_deref().unwrap_or_default();
    let category = doc.category.as_deref().unwrap_or_default();
    let content = doc.content.as_deref().unwrap_or_default();

    format!(
        "Provide a detailed legal analysis and summary of the following document:

Title: {title}
Category: {category}
Content: {content}

Please provide:
1. A comprehensive summary (2-3 paragraphs)
2. Key legal principles and holdings
3. Practical implications
4. Important precedents or citations

Format your response professionally for legal research purposes."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_document_fields() {
        let mut doc = Document::with_id("doc-001");
        doc.title = Some("Smith v. Johnson".to_string());
        doc.category = Some("case_law".to_string());
        doc.content = Some("OPINION".to_string());

        let prompt = build_summary_prompt(&doc);
        assert!(prompt.starts_with("Provide a detailed legal analysis"));
        assert!(prompt.contains("Title: Smith v. Johnson\n"));
        assert!(prompt.contains("Category: case_law\n"));
        assert!(prompt.contains("Content: OPINION\n"));
        assert!(prompt.ends_with("legal research purposes."));
    }

    #[test]
    fn test_prompt_tolerates_missing_fields() {
        let prompt = build_summary_prompt(&Document::with_id("doc-9"));
        assert!(prompt.contains("Title: \n"));
    }
}
