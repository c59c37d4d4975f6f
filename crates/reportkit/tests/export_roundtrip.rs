use calamine::{Data, Reader, Xlsx, open_workbook};
use polars::prelude::{Column, DataFrame, IpcWriter, SerWriter};
use reportkit::{
    ClipboardSink, EnumCellValue, EnumExportJob, EnumIpcTarget, EnumJobOutcome, ExportError,
    SpecCard, SpecCatalogSection, SpecExportOptions, SpecIpcJob, SpecScheduleDay, SpecTable,
    copy_as_structured_text, export_catalog_document, export_document, export_schedule_document,
    export_spreadsheet, load_table_from_ipc, run_job,
};

struct MemoryClipboard(Option<String>);

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<(), String> {
        self.0 = Some(text);
        Ok(())
    }
}

struct DeniedClipboard;

impl ClipboardSink for DeniedClipboard {
    fn set_text(&mut self, _text: String) -> Result<(), String> {
        Err("denied".to_string())
    }
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|c_name| c_name.to_string()).collect()
}

fn options(dir: &tempfile::TempDir) -> SpecExportOptions {
    reportkit_log::init_test();
    SpecExportOptions::default().with_dir_out(dir.path())
}

fn assert_pdf(path: &std::path::Path) {
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_spreadsheet_rows_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let c_title = "Plan de produccion semanal - planta norte";
    let l_rows = vec![
        vec![
            EnumCellValue::from("A"),
            EnumCellValue::from(3),
            EnumCellValue::Number(10.5),
        ],
        vec![
            EnumCellValue::from("B"),
            EnumCellValue::None,
            EnumCellValue::from(7),
        ],
    ];
    let l_headers = headers(&["MODELO", "HC", "TOTAL"]);
    let path = export_spreadsheet(c_title, &l_headers, &l_rows, &options(&dir)).unwrap();
    assert_eq!(path, dir.path().join(format!("{c_title}.xlsx")));

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let l_sheets = workbook.sheet_names().to_vec();
    assert_eq!(l_sheets, vec![c_title.chars().take(31).collect::<String>()]);

    let range = workbook.worksheet_range(&l_sheets[0]).unwrap();
    let l_read: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();
    assert_eq!(l_read.len(), 3);
    assert_eq!(l_read[1][0], Data::String("A".to_string()));
    assert_eq!(l_read[1][1], Data::Float(3.0));
    assert_eq!(l_read[1][2], Data::Float(10.5));
    assert_eq!(l_read[2][1], Data::Empty);
}

#[test]
fn test_document_exports_write_pdf_files() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);
    let l_rows = vec![vec![EnumCellValue::from("A"), EnumCellValue::from(10)]];
    let l_headers = headers(&["MODELO", "TOTAL"]);

    let path = export_document("Resumen", &l_headers, &l_rows, &opts).unwrap();
    assert_eq!(path, dir.path().join("Resumen.pdf"));
    assert_pdf(&path);

    let l_sections = vec![SpecCatalogSection {
        label: "Modelo A".to_string(),
        rows: l_rows.clone(),
    }];
    let path = export_catalog_document("Catalogo", &l_headers, &l_sections, &opts).unwrap();
    assert_pdf(&path);

    let l_days = vec![SpecScheduleDay {
        day: "Lunes".to_string(),
        rows: vec![vec![
            EnumCellValue::from("A"),
            EnumCellValue::from("3"),
            EnumCellValue::from("10"),
        ]],
        stage_tags: vec!["ROBOT".to_string()],
        cards: vec![SpecCard {
            primary_label: "Externo".to_string(),
            quantity: 5.0,
            ..Default::default()
        }],
    }];
    let l_headers = headers(&["MODELO", "HC", "TOTAL"]);
    let path = export_schedule_document("Plan 1/2", &l_headers, &l_days, &opts).unwrap();
    assert_eq!(path, dir.path().join("Plan 1_2.pdf"));
    assert_pdf(&path);
}

#[test]
fn test_missing_output_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir).with_dir_out(dir.path().join("nested").join("out"));
    let path = export_document("Plan", &headers(&["A"]), &[], &opts).unwrap();
    assert!(path.exists());
}

#[test]
fn test_output_path_blocked_by_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path_blocker = dir.path().join("blocker");
    std::fs::write(&path_blocker, b"x").unwrap();
    let opts = options(&dir).with_dir_out(&path_blocker);

    let err = export_document("Plan", &headers(&["A"]), &[], &opts).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}

#[test]
fn test_clipboard_copy_contract() {
    let l_headers = headers(&["A", "B"]);
    let l_rows = vec![
        vec![EnumCellValue::from(1), EnumCellValue::from(2)],
        vec![EnumCellValue::from(3), EnumCellValue::from(4)],
    ];

    let mut sink = MemoryClipboard(None);
    assert!(copy_as_structured_text(&l_headers, &l_rows, &mut sink));
    let value: serde_json::Value = serde_json::from_str(sink.0.as_deref().unwrap()).unwrap();
    assert_eq!(value, serde_json::json!([{"A": 1, "B": 2}, {"A": 3, "B": 4}]));

    assert!(!copy_as_structured_text(&l_headers, &l_rows, &mut DeniedClipboard));
}

#[test]
fn test_run_job_dispatches_by_kind() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);
    let table = SpecTable::new("Hoja", headers(&["A"]), vec![vec![EnumCellValue::from(1)]]);

    let job = EnumExportJob::Spreadsheet(table.clone());
    let outcome = run_job(&job, &opts, &mut DeniedClipboard).unwrap();
    assert_eq!(outcome, EnumJobOutcome::File(dir.path().join("Hoja.xlsx")));

    let mut sink = MemoryClipboard(None);
    let outcome = run_job(&EnumExportJob::Clipboard(table.clone()), &opts, &mut sink).unwrap();
    assert_eq!(outcome, EnumJobOutcome::Copied);

    let err = run_job(&EnumExportJob::Clipboard(table), &opts, &mut DeniedClipboard).unwrap_err();
    assert!(matches!(err, ExportError::Job(_)));
}

fn write_ipc_file(path: &std::path::Path) {
    let mut df = DataFrame::new(vec![
        Column::new("MODELO".into(), &["A", "B"]),
        Column::new("TOTAL".into(), &[Some(10i64), None]),
    ])
    .unwrap();
    let mut file = std::fs::File::create(path).unwrap();
    IpcWriter::new(&mut file).finish(&mut df).unwrap();
}

#[test]
fn test_ipc_file_loads_as_table() {
    let dir = tempfile::tempdir().unwrap();
    let path_ipc = dir.path().join("plan.arrow");
    write_ipc_file(&path_ipc);

    let table = load_table_from_ipc("Plan", &path_ipc).unwrap();
    assert_eq!(table.headers, headers(&["MODELO", "TOTAL"]));
    assert_eq!(
        table.rows,
        vec![
            vec![EnumCellValue::from("A"), EnumCellValue::Number(10.0)],
            vec![EnumCellValue::from("B"), EnumCellValue::None],
        ]
    );
}

#[test]
fn test_run_job_exports_ipc_table_to_target() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(&dir);
    let path_ipc = dir.path().join("plan.arrow");
    write_ipc_file(&path_ipc);

    let job = EnumExportJob::Ipc(SpecIpcJob {
        title: "Plan".to_string(),
        ipc_path: path_ipc.clone(),
        target: EnumIpcTarget::Document,
    });
    let outcome = run_job(&job, &opts, &mut DeniedClipboard).unwrap();
    assert_eq!(outcome, EnumJobOutcome::File(dir.path().join("Plan.pdf")));

    let mut sink = MemoryClipboard(None);
    let job = EnumExportJob::Ipc(SpecIpcJob {
        title: "Plan".to_string(),
        ipc_path: path_ipc,
        target: EnumIpcTarget::Clipboard,
    });
    assert_eq!(run_job(&job, &opts, &mut sink).unwrap(), EnumJobOutcome::Copied);
    let value: serde_json::Value = serde_json::from_str(sink.0.as_deref().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"MODELO": "A", "TOTAL": 10}, {"MODELO": "B", "TOTAL": null}])
    );
}

#[test]
fn test_invalid_ipc_file_is_job_error() {
    let dir = tempfile::tempdir().unwrap();
    let path_ipc = dir.path().join("broken.arrow");
    std::fs::write(&path_ipc, b"not-ipc").unwrap();

    let err = load_table_from_ipc("Plan", &path_ipc).unwrap_err();
    assert!(matches!(err, ExportError::Job(_)));

    let err = load_table_from_ipc("Plan", &dir.path().join("missing.arrow")).unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}
