use super::*;

fn temp_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "vetorlab_png_{tag}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

#[test]
fn unpremultiply_restores_straight_color() {
    assert_eq!(unpremultiply_rgba8(&[128, 0, 0, 128]), vec![255, 0, 0, 128]);
    assert_eq!(unpremultiply_rgba8(&[9, 9, 9, 0]), vec![0, 0, 0, 0]);
    assert_eq!(unpremultiply_rgba8(&[1, 2, 3, 255]), vec![1, 2, 3, 255]);
}

#[test]
fn sequence_paths_are_zero_padded() {
    let p = sequence_path(Path::new("frames"), 7);
    assert_eq!(p, Path::new("frames").join("frame_00007.png"));
}

#[test]
fn png_round_trips_through_image_crate() {
    let dir = temp_dir("single");
    let path = dir.join("nested").join("plot.png");
    write_png(&solid(4, 2, [0, 0, 255, 255]), &path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (4, 2));
    assert_eq!(img.get_pixel(3, 1).0, [0, 0, 255, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sequence_writes_one_file_per_frame() {
    let dir = temp_dir("seq");
    let frames = vec![solid(2, 2, [255; 4]), solid(2, 2, [0, 0, 0, 255])];
    let paths = write_png_sequence(&frames, &dir).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.is_file()));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn truncated_frame_is_rejected() {
    let mut frame = solid(2, 2, [0; 4]);
    frame.data.pop();
    let err = write_png(&frame, Path::new("unused.png")).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}
