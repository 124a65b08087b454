use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationId {
    Origin,
    PeakRing,
    OuterRim,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationPoint {
    pub id: AnnotationId,
    pub world: Vec3,
    pub label: &'static str,
    pub description: &'static str,
}

pub const ANNOTATIONS: [AnnotationPoint; 3] = [
    AnnotationPoint {
        id: AnnotationId::Origin,
        world: Vec3::new(0.0, -2.0, 0.0),
        label: "Impact Origin",
        description: "The \"Melt Sheet\". Rock here was liquified instantly.",
    },
    AnnotationPoint {
        id: AnnotationId::PeakRing,
        world: Vec3::new(38.0, 8.0, 0.0),
        label: "Peak Ring",
        description: "Mountains of granite uplifted from 10km deep. The defining feature of this crater.",
    },
    AnnotationPoint {
        id: AnnotationId::OuterRim,
        world: Vec3::new(80.0, 5.0, 0.0),
        label: "Outer Rim",
        description: "The unstable crater edge, prone to collapse and landslides.",
    },
];

impl AnnotationId {
    pub const ALL: [AnnotationId; 3] = [
        AnnotationId::Origin,
        AnnotationId::PeakRing,
        AnnotationId::OuterRim,
    ];

    /// Stable string key, also used as the egui id of the label.
    pub fn key(self) -> &'static str {
        match self {
            AnnotationId::Origin => "origin",
            AnnotationId::PeakRing => "peak",
            AnnotationId::OuterRim => "rim",
        }
    }

    pub fn point(self) -> &'static AnnotationPoint {
        match self {
            AnnotationId::Origin => &ANNOTATIONS[0],
            AnnotationId::PeakRing => &ANNOTATIONS[1],
            AnnotationId::OuterRim => &ANNOTATIONS[2],
        }
    }
}
