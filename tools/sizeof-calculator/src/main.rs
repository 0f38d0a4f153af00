//! Memory calculator for palette-animator
//!
//! This utility calculates and displays the exact memory footprint of palette
//! animators, sequences and star animations for different capacities. Run it to
//! understand what a given `N`/`S` choice costs in IWRAM/EWRAM.
//!
//! Usage:
//!   cd tools/sizeof-calculator
//!   cargo run --release
//!   cat report.md

use palette_animator::{
    AnimationMode, AnimatorError, AnimatorSlot, AnimatorStatus, ColorSequence, DualPalette,
    PaletteAnimator, Rgb555, StarAnimation, StarAnimationConfig, TitleScreenStars,
};
use std::fs::File;
use std::io::Write;
use std::mem::size_of;

// ============================================================================
// Report Generation Functions
// ============================================================================

fn write_header(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "# Palette Animator Memory Footprint Analysis")?;
    writeln!(f)?;
    writeln!(
        f,
        "**Generated:** {}  ",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(
        f,
        "**Architecture:** {}-bit host",
        std::mem::size_of::<usize>() * 8
    )?;
    writeln!(f)?;
    Ok(())
}

fn write_component_sizes(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Component Sizes")?;
    writeln!(f)?;
    writeln!(f, "| Component | Size |")?;
    writeln!(f, "|-----------|------|")?;
    writeln!(f, "| `Rgb555` | {} B |", size_of::<Rgb555>())?;
    writeln!(f, "| `AnimationMode` | {} B |", size_of::<AnimationMode>())?;
    writeln!(f, "| `AnimatorStatus` | {} B |", size_of::<AnimatorStatus>())?;
    writeln!(f, "| `AnimatorError` | {} B |", size_of::<AnimatorError>())?;
    writeln!(
        f,
        "| `StarAnimationConfig` | {} B |",
        size_of::<StarAnimationConfig>()
    )?;
    writeln!(f, "| `DualPalette` (512 colors) | {} B |", size_of::<DualPalette>())?;
    writeln!(f)?;
    Ok(())
}

fn write_sequence_table(f: &mut File, capacities: &[usize]) -> std::io::Result<()> {
    writeln!(f, "### `ColorSequence<S>`")?;
    writeln!(f)?;
    writeln!(f, "| Capacity | Total Size | Index Storage | Overhead |")?;
    writeln!(f, "|----------|------------|---------------|----------|")?;

    for &capacity in capacities {
        let total_size = match capacity {
            4 => size_of::<ColorSequence<4>>(),
            8 => size_of::<ColorSequence<8>>(),
            16 => size_of::<ColorSequence<16>>(),
            32 => size_of::<ColorSequence<32>>(),
            _ => continue,
        };

        let storage_cost = capacity;
        let overhead = total_size - storage_cost;

        writeln!(
            f,
            "| {} | {} B | {} B | {} B |",
            capacity, total_size, storage_cost, overhead
        )?;
    }

    writeln!(f)?;
    Ok(())
}

fn write_animator_table(f: &mut File, capacities: &[usize]) -> std::io::Result<()> {
    writeln!(f, "### `PaletteAnimator<N, S>` (S = N)")?;
    writeln!(f)?;
    writeln!(
        f,
        "| Colors | Animator | Color Buffers | Sequence | Slot |"
    )?;
    writeln!(
        f,
        "|--------|----------|---------------|----------|------|"
    )?;

    for &capacity in capacities {
        let (animator, sequence, slot) = match capacity {
            4 => (
                size_of::<PaletteAnimator<4, 4>>(),
                size_of::<Option<ColorSequence<4>>>(),
                size_of::<AnimatorSlot<4, 4>>(),
            ),
            8 => (
                size_of::<PaletteAnimator<8, 8>>(),
                size_of::<Option<ColorSequence<8>>>(),
                size_of::<AnimatorSlot<8, 8>>(),
            ),
            16 => (
                size_of::<PaletteAnimator<16, 16>>(),
                size_of::<Option<ColorSequence<16>>>(),
                size_of::<AnimatorSlot<16, 16>>(),
            ),
            32 => (
                size_of::<PaletteAnimator<32, 32>>(),
                size_of::<Option<ColorSequence<32>>>(),
                size_of::<AnimatorSlot<32, 32>>(),
            ),
            _ => continue,
        };

        let buffers = 3 * capacity * size_of::<Rgb555>();

        writeln!(
            f,
            "| {} | {} B | {} B | {} B | {} B |",
            capacity, animator, buffers, sequence, slot
        )?;
    }

    writeln!(f)?;
    Ok(())
}

fn write_star_sizes(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Star Animation Sizes")?;
    writeln!(f)?;
    writeln!(f, "| Configuration | Size |")?;
    writeln!(f, "|---------------|------|")?;
    writeln!(
        f,
        "| `TitleScreenStars` (6 colors, 3 channels, 6 entries) | {} B |",
        size_of::<TitleScreenStars>()
    )?;
    writeln!(
        f,
        "| `StarAnimation<16, 8, 8>` | {} B |",
        size_of::<StarAnimation<16, 8, 8>>()
    )?;
    writeln!(f)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let report_path = "report.md";

    // Remove old report if it exists
    let _ = std::fs::remove_file(report_path);

    let mut file = File::create(report_path)?;

    println!("Generating memory footprint analysis...");

    write_header(&mut file)?;
    write_component_sizes(&mut file)?;

    let capacities = vec![4, 8, 16, 32];

    writeln!(&mut file, "## Animator Memory Usage")?;
    writeln!(&mut file)?;
    write_sequence_table(&mut file, &capacities)?;
    write_animator_table(&mut file, &capacities)?;
    write_star_sizes(&mut file)?;

    writeln!(&mut file, "## Architecture Note")?;
    writeln!(&mut file)?;
    writeln!(
        &mut file,
        "Analysis performed on {}-bit host architecture. The GBA is a 32-bit target, so `usize` fields shrink from 8B to 4B there. Color storage costs remain identical across architectures.",
        std::mem::size_of::<usize>() * 8
    )?;

    println!("✓ Report generated: {}", report_path);
    println!("  View with: cat {}", report_path);

    Ok(())
}
