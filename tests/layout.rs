use std::f64::consts::FRAC_PI_2;

use skill_radar::radar::{RadarConfig, calculate_blip_position, layout_radar};
use skill_radar::skills::parse_catalog;
use skill_radar::{Quadrant, RenderArea, Skill, should_show_skill};

#[test]
fn three_skills_in_first_quadrant() {
    let config = RadarConfig::default();
    let skills = [("A", 0.9), ("B", 0.5), ("C", 0.1)];

    let place = || {
        skills
            .iter()
            .enumerate()
            .map(|(index, (name, confidence))| {
                calculate_blip_position(&config, *confidence, 0.0, FRAC_PI_2, index, skills.len(), name)
            })
            .collect::<Vec<_>>()
    };

    let first = place();
    assert_eq!(first.len(), 3);
    assert!(first[0].radius < first[1].radius);
    assert!(first[1].radius < first[2].radius);
    for position in &first {
        assert!(position.angle > 0.0 && position.angle < FRAC_PI_2);
    }
    assert_eq!(first, place());
}

#[test]
fn full_layout_is_deterministic_and_contained() {
    let config = RadarConfig::default();
    let skills = vec![
        Skill::new("Rust", Quadrant::Languages, 0.95),
        Skill::new("TypeScript", Quadrant::Languages, 0.85),
        Skill::new("Python", Quadrant::Languages, 0.7),
        Skill::new("React", Quadrant::Frameworks, 0.8),
        Skill::new("Leptos", Quadrant::Frameworks, 0.4),
        Skill::new("Cargo", Quadrant::BuildTools, 0.9),
        Skill::new("Vite", Quadrant::BuildTools, 0.6),
        Skill::new("Nix", Quadrant::Infrastructure, 0.5),
        Skill::new("Kubernetes", Quadrant::Infrastructure, 0.3),
        Skill::new("Terraform", Quadrant::Infrastructure, 0.2),
    ];

    let first = layout_radar(&skills, &config);
    let second = layout_radar(&skills, &config);
    assert_eq!(first, second);

    for blip in &first {
        assert!(blip.radius >= config.min_radius && blip.radius <= config.max_radius);
        let span = blip.quadrant.span();
        let buffer = config.angular_buffer(blip.radius);
        assert!(blip.angle >= span.start_angle + buffer - 1e-9, "{} escaped its start wall", blip.id);
        assert!(blip.angle <= span.end_angle - buffer + 1e-9, "{} escaped its end wall", blip.id);
        assert!(blip.x_coordinate.is_finite() && blip.y_coordinate.is_finite());
    }
}

#[test]
fn catalog_drives_visibility_and_layout() {
    let catalog = parse_catalog(
        r#"{
            "radar": { "iterations": 30 },
            "skills": [
                { "name": "Rust", "quadrant": "languages", "confidence": 0.9 },
                { "name": "Bash", "quadrant": "languages", "confidence": 0.3,
                  "render_areas": ["tech-radar"] },
                { "name": "Docker", "quadrant": "infrastructure", "confidence": 0.65,
                  "render_areas": ["resume"] }
            ]
        }"#,
    )
    .unwrap();

    let on_radar = catalog
        .skills
        .iter()
        .filter(|skill| should_show_skill(skill, RenderArea::TechRadar, &catalog.visibility))
        .cloned()
        .collect::<Vec<_>>();
    let names = on_radar.iter().map(|skill| skill.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["Rust", "Bash"]);

    let blips = layout_radar(&on_radar, &catalog.radar);
    assert_eq!(blips.len(), 2);
    assert_eq!(blips[0].id, "languages-Rust");
    assert!(blips[0].radius < blips[1].radius);
}
