//! Compare SymNMF clustering against Lloyd's k-means by silhouette score.
//!
//! Run with: `cargo run --example compare_kmeans`

use symnmf::prelude::*;

const KMEANS_MAX_ITERATIONS: usize = 300;
const KMEANS_EPSILON: f64 = 1e-4;

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

fn closest_centroid(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.iter().enumerate() {
        let dist = euclidean(point, centroid);
        if dist < best_dist {
            best = c;
            best_dist = dist;
        }
    }
    best
}

/// Plain Lloyd's k-means: the first k points seed the centroids, iteration
/// stops when every centroid moves less than epsilon.
fn kmeans_labels(points: &[Vec<f64>], k: usize) -> Vec<usize> {
    let dim = points[0].len();
    let mut centroids: Vec<Vec<f64>> = points[..k].to_vec();

    for _ in 0..KMEANS_MAX_ITERATIONS {
        let mut sums = vec![vec![0.0; dim]; k];
        let mut counts = vec![0usize; k];
        for point in points {
            let c = closest_centroid(point, &centroids);
            counts[c] += 1;
            for (s, &coord) in sums[c].iter_mut().zip(point.iter()) {
                *s += coord;
            }
        }

        let new_centroids: Vec<Vec<f64>> = sums
            .into_iter()
            .zip(counts.iter())
            .map(|(sum, &count)| {
                if count == 0 {
                    vec![0.0; dim]
                } else {
                    sum.into_iter().map(|s| s / count as f64).collect()
                }
            })
            .collect();

        let converged = centroids
            .iter()
            .zip(new_centroids.iter())
            .all(|(old, new)| euclidean(old, new) < KMEANS_EPSILON);
        centroids = new_centroids;
        if converged {
            break;
        }
    }

    points
        .iter()
        .map(|point| closest_centroid(point, &centroids))
        .collect()
}

fn main() -> Result<(), SymNmfError> {
    let text = "\
0.0,0.0
0.3,0.1
0.1,0.4
0.2,0.2
6.0,6.0
6.2,5.9
5.8,6.1
6.1,6.3
-5.0,7.0
-5.1,7.2
-4.9,6.9
-5.2,6.8
";
    let points: Vec<Vec<f64>> = parse_points(text)?;
    let k = 3;

    let model = SymNmf::new().clusters(k).seed(1234).build()?;
    let symnmf_labels = model.fit(&points)?.labels;
    let kmeans_labels = kmeans_labels(&points, k);

    let symnmf_score = silhouette_score(&points, &symnmf_labels).unwrap_or(0.0);
    let kmeans_score = silhouette_score(&points, &kmeans_labels).unwrap_or(0.0);

    println!("symnmf: {:.4}", symnmf_score);
    println!("kmeans: {:.4}", kmeans_score);

    Ok(())
}
