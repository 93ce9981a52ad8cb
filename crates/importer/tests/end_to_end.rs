use importer::{import_meet, parse_meet_text, ImporterError};
use rust_decimal::Decimal;
use scoring::{score_meet, PresetId, PresetRegistry};

const REFERENCE_YEAR: i32 = 2026;

const RESULTS: &str = "\
Trofeo de Invierno - Resultados
Splash Meet Manager, 11.71234 Registered to Federacion de Natacion
Prueba 1 Mixto, 4 x 100m Libre
Clasificación
1 C.N. Albacete 1 C.N. Albacete 4:01.10
2 C.D. Toledo 1 C.D. Toledo 4:05.40
Página 1
Prueba 2 Fem., 100m Libre
Clasificación
1 GARCIA, Ana 95 C.N. Albacete 1:01.10 S
2 LOPEZ, Marta 12 C.D. Toledo 1:02.40 S
3 SANZ, Eva 98 C.N. Albacete 1:03.00 S
";

fn points(values: &[i64]) -> Vec<Decimal> {
    values.iter().copied().map(Decimal::from).collect()
}

#[test]
fn test_text_to_standings() {
    let meet = import_meet("Trofeo de Invierno", RESULTS).unwrap();
    let config = PresetRegistry::new().get(PresetId::ClmRegional2026).unwrap();
    assert_eq!(config.max_swimmers_per_club_per_event, Some(2));

    let scored = score_meet(&meet, &config, REFERENCE_YEAR);
    assert_eq!(scored.events.len(), 2);

    let relay = &scored.events[0];
    assert!(relay.is_relay);
    let relay_points: Vec<Decimal> = relay.results.iter().map(|r| r.open_points).collect();
    assert_eq!(relay_points, points(&[38, 32]));

    let freestyle = &scored.events[1];
    let young = freestyle
        .results
        .iter()
        .find(|r| r.swimmer.as_ref().is_some_and(|s| s.last_name == "LOPEZ"))
        .unwrap();

    assert_eq!(young.swimmer_category.as_deref(), Some("u14"));
    assert!(young.open_points > Decimal::ZERO);
    assert!(young.category_points > Decimal::ZERO);
    assert_eq!(young.total_points(), young.open_points + young.category_points);

    let lopez = scored
        .swimmer_standings
        .iter()
        .find(|s| s.swimmer.last_name == "LOPEZ")
        .unwrap();
    assert_eq!(lopez.total_points, young.open_points + young.category_points);

    assert_eq!(scored.club_standings[0].club.name, "C.N. Albacete");
    assert_eq!(scored.club_standings[0].total_points, Decimal::from(71));
    assert_eq!(scored.club_standings[1].total_points, Decimal::from(67));
}

#[test]
fn test_rescoring_with_other_config_leaves_meet_untouched() {
    let meet = import_meet("Trofeo de Invierno", RESULTS).unwrap();
    let registry = PresetRegistry::new();

    let regional = score_meet(&meet, &registry.get(PresetId::ClmRegional2026).unwrap(), REFERENCE_YEAR);
    let open = score_meet(&meet, &registry.get(PresetId::OpenScoring).unwrap(), REFERENCE_YEAR);
    let again = score_meet(&meet, &registry.get(PresetId::ClmRegional2026).unwrap(), REFERENCE_YEAR);

    assert!(open.events[1].results.iter().all(|r| r.category_points.is_zero()));
    assert_eq!(regional.events[1].results, again.events[1].results);
    assert!(meet.events[1].results.iter().all(|r| r.open_points.is_zero()));
}

#[test]
fn test_unrecoverable_document() {
    let err = import_meet("Nada", "Splash Meet Manager Página 1").unwrap_err();
    assert!(matches!(err, ImporterError::NoEventsFound));
    assert!(parse_meet_text("Prueba 1 Fem., 50m Libre Listado de salida").is_empty());
}
