use ndarray::Array2;
use scatter::{
    GeneralizedOrss, InverseSquaredEuclidean, KMeansPlusPlus, OracleSeed, RandomSeed, SeedSelector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: three well-separated blobs, seeded four ways.
    //
    // This exists primarily to validate that the public API composes; each
    // selector should land one seed per blob essentially always.
    let blobs: Vec<[f64; 2]> = vec![
        // Blob A (near (0,0))
        [0.0, 0.0],
        [0.2, 0.1],
        [0.1, 0.3],
        // Blob B (near (10,0))
        [10.0, 0.0],
        [10.2, 0.1],
        [9.9, 0.2],
        // Blob C (near (0,10))
        [0.0, 10.0],
        [0.1, 10.2],
        [0.3, 9.9],
    ];
    let n = blobs.len();
    let data = Array2::from_shape_vec((n, 2), blobs.into_iter().flatten().collect())?;

    let k = 3;
    let seed = 42;

    let random = RandomSeed::new().with_seed(seed).choose_seeds(k, &data)?;
    let plus_plus = KMeansPlusPlus::new().with_seed(seed).choose_seeds(k, &data)?;
    let orss = GeneralizedOrss::new(InverseSquaredEuclidean::default())
        .with_seed(seed)
        .choose_seeds(k, &data)?;
    let oracle = OracleSeed::new(vec![0, 0, 0, 1, 1, 1, 2, 2, 2]).choose_seeds(k, &data)?;

    for (name, seeds) in [
        ("random", random),
        ("k-means++", plus_plus),
        ("orss", orss),
        ("oracle", oracle),
    ] {
        println!("{name}:");
        for s in seeds {
            println!("  ({:.2}, {:.2})", s[0], s[1]);
        }
    }

    Ok(())
}
