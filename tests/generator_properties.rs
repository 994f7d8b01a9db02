use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_passgen::{CharacterClass, GenerationRequest, GeneratorError, PasswordGenerator};

fn all_requests(lengths: &[usize]) -> Vec<GenerationRequest> {
    let mut requests = Vec::new();
    for &length in lengths {
        for mask in 1u8..16 {
            requests.push(GenerationRequest {
                length,
                include_uppercase: mask & 1 != 0,
                include_lowercase: mask & 2 != 0,
                include_digits: mask & 4 != 0,
                include_special: mask & 8 != 0,
            });
        }
    }
    requests
}

#[test]
fn output_has_requested_length() {
    let generator = PasswordGenerator::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for request in all_requests(&[1, 2, 3, 4, 5, 16, 100]) {
        let password = generator.generate_with_rng(&mut rng, &request).unwrap();
        assert_eq!(password.chars().count(), request.length, "{:?}", request);
    }
}

#[test]
fn output_only_uses_selected_classes() {
    let generator = PasswordGenerator::new();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for request in all_requests(&[1, 3, 12, 40]) {
        let password = generator.generate_with_rng(&mut rng, &request).unwrap();
        for c in password.chars() {
            let class = CharacterClass::classify(c).expect("character outside every class");
            assert!(request.includes(class), "{:?} not selected in {:?}", class, request);
        }
    }
}

#[test]
fn every_selected_class_is_covered_when_length_allows() {
    let generator = PasswordGenerator::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..50 {
        for request in all_requests(&[4, 5, 8, 20]) {
            let password = generator.generate_with_rng(&mut rng, &request).unwrap();
            let present: HashSet<_> = password.chars().filter_map(CharacterClass::classify).collect();
            for class in request.selected_classes() {
                assert!(present.contains(&class), "{} missing from {:?}", class, password);
            }
        }
    }
}

#[test]
fn no_class_selected_fails_for_any_length() {
    let generator = PasswordGenerator::new();
    for length in [1, 2, 16, 1000] {
        let request = GenerationRequest {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_digits: false,
            include_special: false,
        };
        assert_eq!(
            generator.generate(&request),
            Err(GeneratorError::NoCharacterClassSelected)
        );
    }
}

#[test]
fn zero_length_fails_for_any_flags() {
    let generator = PasswordGenerator::new();
    for request in all_requests(&[0]) {
        assert_eq!(generator.generate(&request), Err(GeneratorError::InvalidLength));
    }
}

#[test]
fn independent_calls_differ() {
    let generator = PasswordGenerator::new();
    let request = GenerationRequest::default();
    let passwords: HashSet<String> = (0..100)
        .map(|_| generator.generate(&request).unwrap())
        .collect();
    assert_eq!(passwords.len(), 100);
}

#[test]
fn coverage_characters_are_not_front_loaded() {
    // Without the shuffle the first character would always be uppercase
    let generator = PasswordGenerator::new();
    let request = GenerationRequest {
        length: 4,
        ..GenerationRequest::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut first_position: HashMap<CharacterClass, usize> = HashMap::new();
    let runs = 4000;
    for _ in 0..runs {
        let password = generator.generate_with_rng(&mut rng, &request).unwrap();
        let first = password.chars().next().and_then(CharacterClass::classify).unwrap();
        *first_position.entry(first).or_default() += 1;
    }
    // Each class should lead roughly a quarter of the time
    for class in CharacterClass::ALL {
        let hits = first_position.get(&class).copied().unwrap_or(0);
        assert!((700..1300).contains(&hits), "{} led {} of {} runs", class, hits, runs);
    }
}

#[test]
fn filler_draws_cover_the_whole_alphabet() {
    let generator = PasswordGenerator::new();
    let request = GenerationRequest {
        length: 64,
        include_uppercase: false,
        include_lowercase: false,
        include_digits: true,
        include_special: true,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut counts: HashMap<char, usize> = HashMap::new();
    for _ in 0..500 {
        for c in generator.generate_with_rng(&mut rng, &request).unwrap().chars() {
            *counts.entry(c).or_default() += 1;
        }
    }
    // 42 symbols, 32000 draws: about 760 each
    assert_eq!(counts.len(), 42);
    assert!(counts.values().all(|&n| (500..1100).contains(&n)), "{:?}", counts);
}
