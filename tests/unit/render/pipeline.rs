use super::*;

fn frames(n: usize) -> Vec<Bitmap> {
    (0..n)
        .map(|i| {
            let mut frame = Bitmap::new(12, 9);
            for (j, px) in frame.data.chunks_exact_mut(4).enumerate() {
                let v = ((i * 37 + j * 11) % 251) as u8;
                px.copy_from_slice(&[v, v.wrapping_add(40), v.wrapping_add(90), 255]);
            }
            frame
        })
        .collect()
}

fn noisy_params() -> EffectParameters {
    EffectParameters {
        video_noise: 35.0,
        noise: 20.0,
        color_shift: 6.0,
        tracking_noise: 15.0,
        scanlines: 30.0,
        dust: 70.0,
        scratches: 40.0,
        ..EffectParameters::default()
    }
}

#[test]
fn parallel_matches_sequential_for_the_same_seed() {
    let input = frames(6);
    let params = noisy_params();
    let sequential = process_frames(&input, &params, &RenderThreading::default(), 42).unwrap();
    let parallel = process_frames(
        &input,
        &params,
        &RenderThreading {
            parallel: true,
            threads: Some(3),
        },
        42,
    )
    .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn frame_count_and_order_are_preserved() {
    let input = frames(4);
    let out = process_frames(
        &input,
        &noisy_params(),
        &RenderThreading::default(),
        7,
    )
    .unwrap();
    assert_eq!(out.len(), 4);
    for (i, frame) in out.iter().enumerate() {
        let mut rng = frame_rng(7, i);
        let expected = apply_effects_with(&input[i], &noisy_params(), &mut rng);
        assert_eq!(*frame, expected);
    }
}

#[test]
fn zero_worker_threads_is_rejected() {
    let err = process_frames(
        &frames(1),
        &EffectParameters::default(),
        &RenderThreading {
            parallel: true,
            threads: Some(0),
        },
        0,
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn empty_frame_list_is_fine() {
    let out = process_frames(
        &[],
        &EffectParameters::default(),
        &RenderThreading::default(),
        0,
    )
    .unwrap();
    assert!(out.is_empty());
}
