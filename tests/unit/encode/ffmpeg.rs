use super::*;

#[test]
fn fps_follows_speed() {
    let anim = AnimationSettings::default();
    assert_eq!(animation_fps(&anim, Speed::new(1.0)), 50);
    assert_eq!(animation_fps(&anim, Speed::new(2.0)), 100);
    assert_eq!(animation_fps(&anim, Speed::new(0.5)), 25);
}

#[test]
fn odd_canvas_is_rejected_before_ffmpeg_runs() {
    let render = RenderSettings {
        width: 701,
        ..RenderSettings::default()
    };
    let err = Mp4Writer::create(
        Path::new("target/vetorlab-test/odd.mp4"),
        &render,
        &AnimationSettings::default(),
        Speed::default(),
    )
    .err()
    .unwrap();
    assert!(err.to_string().starts_with("validation error:"));
    assert!(err.to_string().contains("yuv420p"));
}

#[test]
fn encoder_reads_raw_rgba_from_stdin() {
    let args = encoder_args(700, 700, 50, Path::new("out/anim.mp4"));
    let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
    let after = |flag: &str| {
        let i = args.iter().position(|a| a == flag).unwrap();
        args[i + 1].clone()
    };
    assert_eq!(args[0], "-y");
    assert_eq!(after("-video_size"), "700x700");
    assert_eq!(after("-framerate"), "50");
    assert_eq!(after("-i"), "-");
    assert_eq!(after("-pix_fmt"), "yuv420p");
    assert_eq!(args.last().unwrap(), "out/anim.mp4");
}

#[test]
fn premultiplied_half_red_over_black() {
    assert_eq!(over_background(&[128, 0, 0, 128], true, [0, 0, 0, 255]), [128, 0, 0, 255]);
}

#[test]
fn straight_half_red_over_black() {
    assert_eq!(over_background(&[255, 0, 0, 128], false, [0, 0, 0, 255]), [128, 0, 0, 255]);
}

#[test]
fn transparent_pixel_shows_plot_background() {
    let white = RenderSettings::default().clear_rgba;
    assert_eq!(over_background(&[0, 0, 0, 0], true, white), [255, 255, 255, 255]);
}

#[test]
fn opaque_pixel_is_unchanged() {
    assert_eq!(over_background(&[10, 20, 30, 255], true, [255, 255, 255, 255]), [10, 20, 30, 255]);
}

#[test]
fn mismatched_frame_is_rejected() {
    if !ffmpeg_available() {
        return;
    }
    let render = RenderSettings {
        width: 64,
        height: 64,
        margin_px: 4.0,
        ..RenderSettings::default()
    };
    let out = std::env::temp_dir().join(format!("vetorlab_mismatch_{}.mp4", std::process::id()));
    let mut writer =
        Mp4Writer::create(&out, &render, &AnimationSettings::default(), Speed::default()).unwrap();
    let frame = FrameRGBA {
        width: 32,
        height: 32,
        data: vec![0; 32 * 32 * 4],
        premultiplied: true,
    };
    let err = writer.push(&frame).unwrap_err();
    assert!(err.to_string().contains("32x32"));
    assert_eq!(writer.frames(), 0);
    drop(writer);
    let _ = std::fs::remove_file(&out);
}
