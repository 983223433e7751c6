use concierge::domain::{ContentType, UploadedDocument};

#[test]
fn given_txt_filename_when_creating_document_then_resolves_text_content_type() {
    let document = UploadedDocument::new("notes.TXT", b"hello".to_vec());

    assert_eq!(document.extension, "txt");
    assert_eq!(document.content_type(), Some(ContentType::Text));
    assert_eq!(document.size_bytes(), 5);
}

#[test]
fn given_docx_filename_when_creating_document_then_content_type_is_none() {
    let document = UploadedDocument::new("report.docx", Vec::new());

    assert_eq!(document.content_type(), None);
}

#[test]
fn given_filename_without_extension_when_creating_document_then_content_type_is_none() {
    let document = UploadedDocument::new("README", Vec::new());

    assert_eq!(document.extension, "");
    assert_eq!(document.content_type(), None);
}

#[test]
fn given_filename_with_directories_when_creating_document_then_keeps_only_basename() {
    let document = UploadedDocument::new("../../etc/policies/handbook.pdf", Vec::new());

    assert_eq!(document.filename, "handbook.pdf");
    assert_eq!(document.content_type(), Some(ContentType::Pdf));
}
