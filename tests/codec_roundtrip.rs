use rectfit::{Genome, RectfitError, SlotLayout};

#[test]
fn encode_decode_round_trips_every_permutation_of_four() {
    let layout = SlotLayout::for_catalog(4).unwrap();

    // All 24 permutations of [0,1,2,3] with an alternating flip vector
    let mut permutations = Vec::new();
    let items = [0usize, 1, 2, 3];
    for &a in &items {
        for &b in &items {
            for &c in &items {
                for &d in &items {
                    let p = [a, b, c, d];
                    let mut seen = [false; 4];
                    for &v in &p {
                        seen[v] = true;
                    }
                    if seen.iter().all(|&s| s) {
                        permutations.push(p);
                    }
                }
            }
        }
    }
    assert_eq!(permutations.len(), 24);

    let flips = [true, false, false, true];
    for p in permutations {
        let genome = layout.encode(&p, &flips).unwrap();
        assert_eq!(genome.len(), layout.genome_len());

        let decoded = layout.decode(&genome).unwrap();
        let ids: Vec<usize> = decoded.iter().map(|r| r.catalog_id).collect();
        let fs: Vec<bool> = decoded.iter().map(|r| r.flipped).collect();
        let positions: Vec<usize> = decoded.iter().map(|r| r.position).collect();
        assert_eq!(ids, p.to_vec());
        assert_eq!(fs, flips.to_vec());
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }
}

#[test]
fn round_trip_holds_with_wider_than_minimal_id_field() {
    // 3 ids only need 2 bits; give them 5
    let layout = SlotLayout::new(3, 5).unwrap();
    let genome = layout.encode(&[2, 0, 1], &[false, true, false]).unwrap();
    // 3 slots of (5 + 1) bits
    assert_eq!(genome.len(), 18);

    let decoded = layout.decode(&genome).unwrap();
    let ids: Vec<usize> = decoded.iter().map(|r| r.catalog_id).collect();
    assert_eq!(ids, vec![2, 0, 1]);
}

#[test]
fn decode_fails_fast_on_truncated_genome() {
    let layout = SlotLayout::for_catalog(4).unwrap();
    let genome = layout.encode(&[0, 1, 2, 3], &[false; 4]).unwrap();
    let truncated = Genome::new(genome.bits()[..genome.len() - 1].to_vec());

    match layout.decode(&truncated) {
        Err(RectfitError::InvalidGenomeLength {
            length, expected, ..
        }) => {
            assert_eq!(length, 11);
            assert_eq!(expected, 12);
        }
        other => panic!("expected InvalidGenomeLength, got {:?}", other),
    }
}

#[test]
fn decode_never_wraps_an_out_of_range_id() {
    // 5-id catalog uses 3 bits, so 0b111 = 7 is representable but invalid.
    let layout = SlotLayout::for_catalog(5).unwrap();
    let mut genome = layout.encode(&[0, 1, 2, 3, 4], &[false; 5]).unwrap();
    let slot = layout.slot_width();
    // Overwrite slot 2's id bits with 0b111
    genome.set(2 * slot, true);
    genome.set(2 * slot + 1, true);
    genome.set(2 * slot + 2, true);

    match layout.decode(&genome) {
        Err(RectfitError::IdOutOfRange { id, position, .. }) => {
            assert_eq!(id, 7);
            assert_eq!(position, 2);
        }
        other => panic!("expected IdOutOfRange, got {:?}", other),
    }
}

#[test]
fn encode_rejects_id_wider_than_the_field() {
    let layout = SlotLayout::new(2, 1).unwrap();
    // id 2 needs two bits
    let err = layout.encode(&[2, 0], &[false, false]).unwrap_err();
    assert!(matches!(err, RectfitError::EncodingOverflow { id: 2, bits: 1 }));
}
