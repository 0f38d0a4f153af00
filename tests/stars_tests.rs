//! Integration tests for StarAnimation

mod common;
use common::*;

use palette_animator::stars::{
    COLOR_IDX_BACKGROUND, COLOR_IDX_BRIGHT, COLOR_IDX_DIM, COLOR_IDX_MEDIUM, STAR_BANK,
};
use palette_animator::{
    AnimatorError, DualPalette, Rgb555, StarAnimation, StarAnimationConfig, TitleScreenStars,
    bg_pltt_id, run_until_idle,
};

const NIGHT: Rgb555 = Rgb555::new(0, 0, 4);
const DIM: Rgb555 = Rgb555::new(8, 8, 8);
const MEDIUM: Rgb555 = Rgb555::new(16, 16, 16);
const BRIGHT: Rgb555 = Rgb555::new(31, 31, 31);

fn title_palette() -> DualPalette {
    let mut pltt = DualPalette::new();
    pltt.load(
        bg_pltt_id(STAR_BANK),
        &[Rgb555::BLACK, DARK, NIGHT, DIM, MEDIUM, BRIGHT],
    );
    pltt
}

fn star(pltt: &DualPalette, index: u8) -> Rgb555 {
    pltt.faded()[bg_pltt_id(STAR_BANK) + usize::from(index)]
}

#[test]
fn title_screen_preset_matches_star_cycles() {
    let pltt = title_palette();
    let stars = TitleScreenStars::title_screen(&pltt).unwrap();

    let channels = stars.channels();
    assert_eq!(channels.len(), 3);
    assert_eq!(channels[0].target(), COLOR_IDX_DIM);
    assert_eq!(channels[0].sequence(), &[4, 5, 4, 3, 2]);
    assert_eq!(channels[1].target(), COLOR_IDX_MEDIUM);
    assert_eq!(channels[1].sequence(), &[5, 4, 3, 2, 3, 4]);
    assert_eq!(channels[2].target(), COLOR_IDX_BRIGHT);
    assert_eq!(channels[2].sequence(), &[4, 3, 2, 3, 4]);
    assert_eq!(stars.config(), StarAnimationConfig::default());
    assert_eq!(stars.offset(), 224);
    assert_eq!(stars.saved_colors()[usize::from(COLOR_IDX_BACKGROUND)], NIGHT);
}

#[test]
fn first_frame_shows_each_cycle_start() {
    let mut pltt = title_palette();
    let mut stars = TitleScreenStars::title_screen(&pltt).unwrap();

    stars.update(&mut pltt);

    assert_eq!(star(&pltt, COLOR_IDX_DIM), MEDIUM);
    assert_eq!(star(&pltt, COLOR_IDX_MEDIUM), BRIGHT);
    assert_eq!(star(&pltt, COLOR_IDX_BRIGHT), MEDIUM);
    assert_eq!(star(&pltt, COLOR_IDX_BACKGROUND), NIGHT);
}

#[test]
fn halfway_through_a_transition_blends_with_truncation() {
    let mut pltt = title_palette();
    let mut stars = TitleScreenStars::title_screen(&pltt).unwrap();

    tick(32, || stars.update(&mut pltt));

    assert_eq!(stars.progress(), 16);
    // medium -> bright: 16 + 15 * 16 / 32 = 23
    assert_eq!(star(&pltt, COLOR_IDX_DIM), Rgb555::new(23, 23, 23));
    // medium -> dim: 16 - 8 * 16 / 32 = 12
    assert_eq!(star(&pltt, COLOR_IDX_BRIGHT), Rgb555::new(12, 12, 12));
}

#[test]
fn cycles_advance_after_each_full_transition() {
    let mut pltt = title_palette();
    let mut stars = TitleScreenStars::title_screen(&pltt).unwrap();

    tick(64, || stars.update(&mut pltt));

    assert_eq!(stars.progress(), 0);
    assert!(stars.channels().iter().all(|c| c.position() == 1));
    assert_eq!(star(&pltt, COLOR_IDX_DIM), BRIGHT);
    assert_eq!(star(&pltt, COLOR_IDX_MEDIUM), MEDIUM);
    assert_eq!(star(&pltt, COLOR_IDX_BRIGHT), DIM);
}

#[test]
fn cycles_wrap_back_to_their_start() {
    let mut pltt = title_palette();
    let mut stars = TitleScreenStars::title_screen(&pltt).unwrap();

    tick(5 * 64, || stars.update(&mut pltt));

    let positions: heapless::Vec<usize, 3> =
        stars.channels().iter().map(|c| c.position()).collect();
    assert_eq!(positions.as_slice(), &[0, 5, 0]);
}

#[test]
fn writes_reach_both_palette_buffers() {
    let mut pltt = title_palette();
    let mut stars = TitleScreenStars::title_screen(&pltt).unwrap();

    tick(64, || stars.update(&mut pltt));

    let index = bg_pltt_id(STAR_BANK) + usize::from(COLOR_IDX_DIM);
    assert_eq!(pltt.unfaded()[index], BRIGHT);
    assert_eq!(pltt.faded()[index], BRIGHT);
}

#[test]
fn star_animation_never_goes_idle_until_stopped() {
    let mut display = MockDisplay::with_colors(0, &[Rgb555::BLACK, DIM, BRIGHT]);
    let config = StarAnimationConfig {
        frame_divider: 1,
        transition_frames: 4,
    };
    let mut stars = StarAnimation::<3, 1, 2>::new(0, 3, &display, config).unwrap();
    stars.add_channel(1, &[1, 2]).unwrap();

    assert_eq!(run_until_idle(&mut stars, &mut display, 100), None);

    stars.stop();
    display.clear_writes();
    assert_eq!(run_until_idle(&mut stars, &mut display, 100), Some(0));
    assert!(display.writes().is_empty());
}

#[test]
fn region_must_fit_in_source() {
    let display = MockDisplay::filled(DIM);
    let result =
        StarAnimation::<8, 1, 1>::new(60, 8, &display, StarAnimationConfig::default());
    assert!(matches!(
        result,
        Err(AnimatorError::RegionOutOfBounds {
            offset: 60,
            size: 8,
            palette_len: 64
        })
    ));
}
