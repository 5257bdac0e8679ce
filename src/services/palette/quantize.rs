// Color quantization
// k-means over the accepted samples in Lab space, then a merge pass for
// clusters whose HSL values are close.

use std::collections::BTreeSet;

use kmeans_colors::get_kmeans;
use palette::{IntoColor, Lab, Srgb};

use super::PaletteOptions;
use crate::models::color::{ExtractedColor, Rgb};

#[derive(Debug, Clone, Copy)]
struct Cluster {
    color: Rgb,
    count: u64,
}

pub(super) fn cluster(
    pixels: &[u8],
    options: &PaletteOptions,
    accept: impl Fn(u8, u8, u8, u8) -> bool,
) -> Vec<ExtractedColor> {
    let total = pixels.len() / 4;
    if total == 0 {
        return Vec::new();
    }

    let limit = options.sample_limit.max(1);
    let stride = total.div_ceil(limit).max(1);

    let mut lab_pixels: Vec<Lab> = Vec::new();
    let mut distinct: BTreeSet<[u8; 3]> = BTreeSet::new();
    for pixel in pixels.chunks_exact(4).step_by(stride) {
        let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
        if !accept(r, g, b, a) {
            continue;
        }
        distinct.insert([r, g, b]);
        lab_pixels.push(to_lab(r, g, b));
    }

    if lab_pixels.is_empty() {
        return Vec::new();
    }

    // Never ask for more centroids than there are distinct colors
    let k = options
        .max_colors
        .min(distinct.len())
        .clamp(1, u8::MAX as usize);
    let kmeans = get_kmeans(
        k,
        options.max_iterations,
        options.convergence,
        false,
        &lab_pixels,
        options.seed,
    );

    let mut counts = vec![0u64; kmeans.centroids.len()];
    for &index in &kmeans.indices {
        if let Some(count) = counts.get_mut(index as usize) {
            *count += 1;
        }
    }

    let clusters: Vec<Cluster> = kmeans
        .centroids
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&centroid, count)| Cluster {
            color: from_lab(centroid),
            count,
        })
        .collect();

    let accepted = lab_pixels.len() as f64;
    merge_by_hsl(clusters, options)
        .into_iter()
        .map(|cluster| ExtractedColor::from_rgb(cluster.color, cluster.count as f64 / accepted))
        .collect()
}

/// Fold each cluster into the first larger one with a close HSL value.
/// The larger cluster's color represents the merged one.
fn merge_by_hsl(mut clusters: Vec<Cluster>, options: &PaletteOptions) -> Vec<Cluster> {
    clusters.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.color.to_hex().cmp(&b.color.to_hex()))
    });

    let mut merged: Vec<(Cluster, (f64, f64, f64))> = Vec::new();
    for cluster in clusters {
        let hsl = cluster.color.to_hsl();
        match merged
            .iter_mut()
            .find(|(_, seed)| hsl_close(*seed, hsl, options))
        {
            Some((target, _)) => target.count += cluster.count,
            None => merged.push((cluster, hsl)),
        }
    }

    merged.into_iter().map(|(cluster, _)| cluster).collect()
}

fn to_lab(r: u8, g: u8, b: u8) -> Lab {
    Srgb::new(r, g, b).into_format::<f32>().into_color()
}

fn from_lab(lab: Lab) -> Rgb {
    let rgb: Srgb = lab.into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Rgb::new(rgb.red, rgb.green, rgb.blue)
}

fn hsl_close(a: (f64, f64, f64), b: (f64, f64, f64), options: &PaletteOptions) -> bool {
    let hue_gap = (a.0 - b.0).abs();
    let hue_gap = hue_gap.min(1.0 - hue_gap);
    hue_gap < options.hue_distance
        && (a.1 - b.1).abs() < options.saturation_distance
        && (a.2 - b.2).abs() < options.lightness_distance
}
