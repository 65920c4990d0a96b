use std::path::PathBuf;

use tapewarp::{Bitmap, find_preset};

fn build_color_bars(width: u32, height: u32) -> Bitmap {
    const BARS: [[u8; 4]; 8] = [
        [255, 255, 255, 255],
        [255, 255, 0, 255],
        [0, 255, 255, 255],
        [0, 255, 0, 255],
        [255, 0, 255, 255],
        [255, 0, 0, 255],
        [0, 0, 255, 255],
        [16, 16, 16, 255],
    ];
    let mut frame = Bitmap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let bar = (x * 8 / width) as usize;
            let i = frame.offset(x, y);
            frame.data[i..i + 4].copy_from_slice(&BARS[bar]);
        }
    }
    frame
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let preset = std::env::args().nth(1).unwrap_or_else(|| "classic-vhs".to_string());
    let params = find_preset(&preset)
        .ok_or_else(|| anyhow::anyhow!("unknown preset '{preset}'"))?;

    let frame = build_color_bars(512, 384);
    let warped = tapewarp::apply_effects_seeded(&frame, &params, 1);

    let out_dir = PathBuf::from("assets");
    std::fs::create_dir_all(&out_dir)?;
    let out_path = out_dir.join(format!("bars_{preset}.png"));

    image::save_buffer_with_format(
        &out_path,
        &warped.data,
        warped.width,
        warped.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
