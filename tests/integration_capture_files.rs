//! Capturing regular files, alone and next to a `.txt` sibling file.

mod common;

use anyhow::Result;
use common::fixtures::CaptureFixture;
use fscapture::{CaptureOptions, FileType, SortOrder, capture};

#[tokio::test]
async fn captures_file_with_default_options() -> Result<()> {
    let fixture = CaptureFixture::new()?;
    let file = fixture.path("file");

    let results = capture(&file, &CaptureOptions::default()).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, file);
    assert_eq!(results[0].file_type, FileType::File);
    assert_eq!(results[0].stats.len, 0);
    Ok(())
}

#[tokio::test]
async fn captures_dotted_file_with_default_options() -> Result<()> {
    let fixture = CaptureFixture::new()?;
    let file = fixture.path("file.txt");

    let results = capture(&file, &CaptureOptions::default()).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, file);
    assert_eq!(results[0].file_type, FileType::File);
    Ok(())
}

#[tokio::test]
async fn captures_base_file_first_with_extension() -> Result<()> {
    let fixture = CaptureFixture::new()?;

    let options = CaptureOptions::new().with_extension(".txt");
    let results = capture(fixture.path("file"), &options).await?;

    let paths: Vec<_> = results.iter().map(|e| e.path.clone()).collect();
    assert_eq!(paths, [fixture.path("file"), fixture.path("file.txt")]);
    assert!(results.iter().all(fscapture::CaptureEntry::is_file));
    Ok(())
}

#[tokio::test]
async fn captures_extension_file_first_with_sort() -> Result<()> {
    let fixture = CaptureFixture::new()?;

    let options = CaptureOptions::new()
        .with_extension(".txt")
        .with_sort(SortOrder::PreferExtensionFirst);
    let results = capture(fixture.path("file"), &options).await?;

    let paths: Vec<_> = results.iter().map(|e| e.path.clone()).collect();
    assert_eq!(paths, [fixture.path("file.txt"), fixture.path("file")]);
    assert!(results.iter().all(fscapture::CaptureEntry::is_file));
    Ok(())
}
