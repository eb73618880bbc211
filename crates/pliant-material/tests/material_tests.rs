//! Integration tests for pliant-material.

use std::sync::Arc;

use pliant_material::{Material, MaterialDatabase, MaterialKind};

// ─── Material Tests ───────────────────────────────────────────

#[test]
fn presets_are_valid() {
    for m in [
        Material::metal(),
        Material::wood(),
        Material::plastic(),
        Material::rubber(),
    ] {
        m.validate().unwrap();
    }
}

#[test]
fn out_of_range_elasticity_rejected() {
    let mut m = Material::rubber();
    m.elasticity = 1.5;
    let err = m.validate().unwrap_err();
    assert!(err.to_string().contains("elasticity"));
}

#[test]
fn non_positive_density_rejected() {
    let mut m = Material::wood();
    m.density = 0.0;
    assert!(m.validate().is_err());
}

#[test]
fn combined_coefficients() {
    let metal = Material::metal();
    let rubber = Material::rubber();
    assert!((metal.restitution_with(&rubber) - 0.3).abs() < 1e-12);
    assert!((metal.friction_with(&rubber) - (0.2_f64 * 0.8).sqrt()).abs() < 1e-12);
}

#[test]
fn default_is_plastic() {
    assert_eq!(Material::default().kind, MaterialKind::Plastic);
}

#[test]
fn material_toml_roundtrip() {
    let m = Material::rubber();
    let text = toml::to_string(&m).unwrap();
    let recovered: Material = toml::from_str(&text).unwrap();
    assert_eq!(recovered, m);
}

// ─── MaterialDatabase Tests ──────────────────────────────────

#[test]
fn default_database_has_four_materials() {
    let db = MaterialDatabase::with_defaults();
    assert_eq!(db.len(), 4);
    assert_eq!(db.names(), vec!["metal", "plastic", "rubber", "wood"]);
}

#[test]
fn lookup_by_name_and_kind() {
    let db = MaterialDatabase::with_defaults();
    let metal = db.get("metal").unwrap();
    assert_eq!(metal.density, 7.8);
    let rubber = db.by_kind(MaterialKind::Rubber).unwrap();
    assert_eq!(rubber.elasticity, 0.9);
}

#[test]
fn missing_material_returns_none() {
    let db = MaterialDatabase::with_defaults();
    assert!(db.get("unobtainium").is_none());
    assert!(db.by_kind(MaterialKind::Custom).is_none());
}

#[test]
fn lookups_share_one_record() {
    let db = MaterialDatabase::with_defaults();
    let a = db.get("wood").unwrap();
    let b = db.get("wood").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn custom_material() {
    let mut db = MaterialDatabase::empty();
    assert!(db.is_empty());
    let handle = db
        .register(Material {
            name: "foam".into(),
            kind: MaterialKind::Custom,
            density: 0.05,
            elasticity: 0.2,
            friction: 0.6,
            hardness: 0.05,
            deformability: 0.95,
        })
        .unwrap();
    assert_eq!(db.len(), 1);
    assert_eq!(handle.name, "foam");
    assert!(db.get("foam").is_some());
}

#[test]
fn invalid_custom_material_not_registered() {
    let mut db = MaterialDatabase::empty();
    let mut bad = Material::plastic();
    bad.name = "bad".into();
    bad.friction = -0.1;
    assert!(db.register(bad).is_err());
    assert!(db.is_empty());
}
