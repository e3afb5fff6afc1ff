use pretty_assertions::assert_eq;
use rd_converter::processors::Converter;
use rd_converter::readers::TableReader;
use rd_converter::reproject::Reprojector;
use rd_converter::ConversionError;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create input");
    file.write_all(content).expect("write input");
    path
}

#[test]
fn test_full_pipeline_comma_delimited() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "bomen.csv",
        b"boomnummer,soort,geometrie\n\
          1001,Quercus robur,POINT(121687.45 487484.12)\n\
          1002,Fagus sylvatica,POINT (155000 463000)\n\
          1003,Tilia cordata,niet gekarteerd\n",
    );

    let report = Converter::new("geometrie").convert(&input, None).unwrap();
    assert_eq!(report.rows_read, 3);
    assert_eq!(report.rows_skipped, 1);
    assert_eq!(report.rows_written, 2);

    let content = std::fs::read_to_string(dir.path().join("bomen_wgs84.csv")).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "boomnummer,soort,geometrie,x_rd,y_rd,longitude,latitude"
    );

    // Amsterdam-area tree: roughly 4.9°E, 52.37°N.
    let row: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(row[0], "1001");
    assert_eq!(row[3], "121687.45");
    assert_eq!(row[4], "487484.12");
    let lon: f64 = row[5].parse().unwrap();
    let lat: f64 = row[6].parse().unwrap();
    assert!((lon - 4.9).abs() < 0.1, "lon={}", lon);
    assert!((lat - 52.37).abs() < 0.1, "lat={}", lat);

    // The dropped row must not appear at all.
    assert!(!content.contains("1003"));
}

#[test]
fn test_full_pipeline_semicolon_windows_1252() {
    let dir = TempDir::new().unwrap();
    // 0xEB is 'ë' in Windows-1252; invalid as UTF-8.
    let input = write_input(
        &dir,
        "bomen.csv",
        b"id;co\xebrdinaat\n1;POINT(155000 463000)\n",
    );

    let report = Converter::new("co\u{eb}rdinaat")
        .convert(&input, None)
        .unwrap();
    assert_eq!(report.rows_written, 1);

    let content = std::fs::read_to_string(&report.output_path).unwrap();
    // Output is always comma-separated regardless of the input delimiter.
    assert!(content.starts_with("id,co\u{eb}rdinaat,x_rd,y_rd,longitude,latitude\n"));
}

#[test]
fn test_reference_point_round_trip() {
    let reprojector = Reprojector::rd_to_wgs84().unwrap();
    let (lon, lat) = reprojector.transform_point(155000.0, 463000.0).unwrap();
    assert!((lon - 5.387).abs() < 0.01, "lon={}", lon);
    assert!((lat - 52.156).abs() < 0.01, "lat={}", lat);
}

#[test]
fn test_non_csv_extension_is_fatal_before_read() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bomen.xlsx", b"id,geometrie\n1,POINT(1 2)\n");

    let result = TableReader::new().read(&input);
    assert!(matches!(
        result,
        Err(ConversionError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_missing_column_lists_available_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bomen.csv", b"id,locatie\n1,POINT(155000 463000)\n");
    let output = dir.path().join("out.csv");

    let err = Converter::new("geometrie")
        .convert(&input, Some(&output))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("geometrie"), "message: {}", message);
    assert!(message.contains("id"), "message: {}", message);
    assert!(message.contains("locatie"), "message: {}", message);
    assert!(!output.exists());
}

#[test]
fn test_all_rows_unparseable_still_writes_header() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "bomen.csv", b"id,geometrie\n1,n.v.t.\n2,-\n");

    let report = Converter::new("geometrie").convert(&input, None).unwrap();
    assert_eq!(report.rows_skipped, 2);
    assert_eq!(report.rows_written, 0);

    let content = std::fs::read_to_string(&report.output_path).unwrap();
    assert_eq!(content, "id,geometrie,x_rd,y_rd,longitude,latitude\n");
}
