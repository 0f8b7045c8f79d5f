#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadCatalog,
    LoadDetail { name: String, url: String },
    ExportPdf { lines: Vec<String> },
}
