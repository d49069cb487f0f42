//! Desired primitive lists for each layer group.
//!
//! Every function here is pure: the same inputs always produce the same
//! list, so a group rebuilt with unchanged dependencies comes out equal.

use super::primitive::{Material, Primitive, Shape};
use crate::geo::{project, ArcCurve};
use crate::options::{ColorOptions, GeometryOptions, ParticleOptions};
use crate::simulation::ParticleVisual;
use crate::topology::{find_node, CloudRegion, LinkSample, LiveLatencies, Node};

/// One sphere per node plus a ring around the selected node.
#[must_use]
pub fn markers(
    nodes: &[Node],
    selected: Option<&str>,
    geometry: &GeometryOptions,
    colors: &ColorOptions,
) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(nodes.len() + 1);
    let mut ring = None;
    for node in nodes {
        let center = project(node.lat, node.lng, geometry.marker_elevation);
        let is_selected = selected == Some(node.id.as_str());
        let (radius, emissive) = if is_selected {
            (geometry.selected_marker_size, colors.selected_emissive)
        } else {
            (geometry.marker_size, colors.marker_emissive)
        };
        out.push(Primitive::pickable(
            Shape::Sphere { center, radius },
            Material::phong(colors.provider_color(node.provider), 1.0, emissive),
            node.id.clone(),
        ));
        if is_selected && ring.is_none() {
            ring = Some(Primitive::new(
                Shape::surface_ring(center, geometry.ring_inner, geometry.ring_outer),
                Material::basic(colors.ring, colors.ring_opacity),
            ));
        }
    }
    out.extend(ring);
    out
}

/// One arc per link sample whose endpoints both resolve.
#[must_use]
pub fn connections(
    links: &[LinkSample],
    nodes: &[Node],
    geometry: &GeometryOptions,
    colors: &ColorOptions,
) -> Vec<Primitive> {
    links
        .iter()
        .filter_map(|link| {
            let from = find_node(nodes, &link.from_id)?;
            let to = find_node(nodes, &link.to_id)?;
            let arc = ArcCurve::new(
                project(from.lat, from.lng, geometry.connection_elevation),
                project(to.lat, to.lng, geometry.connection_elevation),
                geometry.connection_bulge,
            );
            Some(Primitive::new(
                Shape::Polyline {
                    points: arc.sample(geometry.arc_segments as usize).collect(),
                },
                Material::basic(
                    colors.latency_color(link.latency_ms),
                    colors.connection_opacity,
                ),
            ))
        })
        .collect()
}

/// One flat disc per configured cloud region.
#[must_use]
pub fn regions(
    regions: &[CloudRegion],
    geometry: &GeometryOptions,
    colors: &ColorOptions,
) -> Vec<Primitive> {
    regions
        .iter()
        .map(|region| {
            let center = project(region.lat, region.lng, geometry.region_elevation);
            Primitive::new(
                Shape::surface_disc(center, region.radius * geometry.region_scale),
                Material::basic(
                    colors.provider_color(region.provider),
                    colors.region_opacity,
                ),
            )
        })
        .collect()
}

/// One heat spot per node, colored and faded by its live latency.
#[must_use]
pub fn heatmap(
    nodes: &[Node],
    live: &LiveLatencies,
    geometry: &GeometryOptions,
    colors: &ColorOptions,
) -> Vec<Primitive> {
    nodes
        .iter()
        .map(|node| {
            let latency = live.get_or(&node.id, colors.heatmap_default_latency);
            let center = project(node.lat, node.lng, geometry.heatmap_elevation);
            Primitive::new(
                Shape::surface_disc(center, geometry.heatmap_size),
                Material::basic(colors.latency_color(latency), colors.heat_opacity(latency)),
            )
        })
        .collect()
}

/// Keyed particle spheres.
#[must_use]
pub fn particles(
    visuals: &[ParticleVisual],
    options: &ParticleOptions,
) -> Vec<(u64, Primitive)> {
    visuals
        .iter()
        .map(|v| {
            (
                v.id,
                Primitive::new(
                    Shape::Sphere {
                        center: v.position,
                        radius: options.size * v.scale,
                    },
                    Material::basic(options.color, v.opacity),
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::topology::{catalog, LatencyTier, Provider};
    use crate::util::color::rgb;

    fn ab() -> Vec<Node> {
        vec![
            Node::new("A", "Alpha", 0.0, 0.0, Provider::Aws, "us-east-1"),
            Node::new("B", "Beta", 0.0, 90.0, Provider::Gcp, "europe-west1"),
        ]
    }

    #[test]
    fn markers_highlight_selection() {
        let geometry = GeometryOptions::default();
        let colors = ColorOptions::default();
        let prims = markers(&ab(), Some("B"), &geometry, &colors);
        assert_eq!(prims.len(), 3);

        let Shape::Sphere { radius, center } = prims[1].shape else {
            unreachable!()
        };
        assert_eq!(radius, 0.08);
        assert_eq!(prims[1].material.emissive, 1.0);
        assert_eq!(prims[1].pick_id.as_deref(), Some("B"));
        assert!((center - Vec3::new(0.0, 0.0, -2.05)).length() < 1e-5);

        assert_eq!(prims[0].material.color, rgb(0xff9900));
        assert_eq!(prims[0].material.emissive, 0.5);
        assert!(matches!(prims[2].shape, Shape::Ring { .. }));
        assert!(prims[2].pick_id.is_none());
    }

    #[test]
    fn markers_without_selection_have_no_ring() {
        let prims = markers(
            &ab(),
            Some("missing"),
            &GeometryOptions::default(),
            &ColorOptions::default(),
        );
        assert_eq!(prims.len(), 2);
        assert!(prims.iter().all(|p| p.pick_id.is_some()));
    }

    #[test]
    fn single_good_link_gives_one_green_arc() {
        let colors = ColorOptions::default();
        let links = [LinkSample::new("A", "B", 40.0, 0)];
        let prims = connections(&links, &ab(), &GeometryOptions::default(), &colors);
        assert_eq!(prims.len(), 1);
        assert_eq!(colors.latency_tier(40.0), LatencyTier::Good);
        assert_eq!(prims[0].material.color, rgb(0x10b981));
        assert_eq!(prims[0].material.opacity, 0.6);
        let Shape::Polyline { points } = &prims[0].shape else {
            unreachable!()
        };
        assert_eq!(points.len(), 51);
        assert!((points[0] - Vec3::new(2.05, 0.0, 0.0)).length() < 1e-5);
        assert!((points[50] - Vec3::new(0.0, 0.0, -2.05)).length() < 1e-5);
    }

    #[test]
    fn links_with_unknown_endpoints_are_skipped() {
        let links = [
            LinkSample::new("A", "Z", 10.0, 0),
            LinkSample::new("Y", "B", 10.0, 0),
            LinkSample::new("B", "A", 200.0, 0),
        ];
        let colors = ColorOptions::default();
        let prims = connections(&links, &ab(), &GeometryOptions::default(), &colors);
        assert_eq!(prims.len(), 1);
        assert_eq!(prims[0].material.color, rgb(0xef4444));
    }

    #[test]
    fn region_discs_scale_with_radius() {
        let colors = ColorOptions::default();
        let prims = regions(&catalog::default_regions(), &GeometryOptions::default(), &colors);
        assert_eq!(prims.len(), 4);
        for (prim, region) in prims.iter().zip(catalog::default_regions()) {
            let Shape::Disc { radius, center, .. } = prim.shape else {
                unreachable!()
            };
            assert!((radius - region.radius * 0.01).abs() < 1e-6);
            assert!((center.length() - 2.02).abs() < 1e-4);
            assert_eq!(prim.material.opacity, 0.3);
        }
    }

    #[test]
    fn heatmap_defaults_missing_latency() {
        let colors = ColorOptions::default();
        let live: LiveLatencies = [("a", 0.0_f32)].into_iter().collect();
        let prims = heatmap(&ab(), &live, &GeometryOptions::default(), &colors);
        assert_eq!(prims.len(), 2);
        // "A" matches the lower-cased key and keeps its zero latency.
        assert!((prims[0].material.opacity - 0.4).abs() < 1e-6);
        assert_eq!(prims[0].material.color, rgb(0x10b981));
        // "B" has no entry and falls back to 75 ms.
        assert!((prims[1].material.opacity - 0.4 * (1.0 - 75.0 / 200.0)).abs() < 1e-6);
        assert_eq!(prims[1].material.color, rgb(0xf59e0b));
    }

    #[test]
    fn builders_are_deterministic() {
        let geometry = GeometryOptions::default();
        let colors = ColorOptions::default();
        let nodes = catalog::default_exchanges();
        let links = [LinkSample::new(&nodes[0].id, &nodes[3].id, 120.0, 5)];
        assert_eq!(
            connections(&links, &nodes, &geometry, &colors),
            connections(&links, &nodes, &geometry, &colors)
        );
        assert_eq!(
            markers(&nodes, None, &geometry, &colors),
            markers(&nodes, None, &geometry, &colors)
        );
    }
}
