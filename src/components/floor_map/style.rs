//! Node category to marker style mapping.

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
	Hallway,
	ConferenceRoom,
	Department,
	Elevator,
	Exit,
	InfoDesk,
	Lab,
	Restroom,
	Bathroom,
	Retail,
	Stairs,
	Service,
	/// Any code outside the known set, kept verbatim.
	Other(String),
}

impl NodeCategory {
	pub fn from_code(code: &str) -> Self {
		match code.trim() {
			"HALL" => Self::Hallway,
			"CONF" => Self::ConferenceRoom,
			"DEPT" => Self::Department,
			"ELEV" => Self::Elevator,
			"EXIT" => Self::Exit,
			"INFO" => Self::InfoDesk,
			"LABS" => Self::Lab,
			"REST" => Self::Restroom,
			"BATH" => Self::Bathroom,
			"RETL" => Self::Retail,
			"STAI" => Self::Stairs,
			"SERV" => Self::Service,
			other => Self::Other(other.to_string()),
		}
	}
}

/// Geometric primitive used for a marker, in unscaled world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryKind {
	Box { width: f64, height: f64, depth: f64 },
	Sphere { radius: f64 },
	Cylinder { radius: f64, height: f64, sides: u32 },
	Cone { radius: f64, height: f64, sides: u32 },
	Octahedron { radius: f64 },
}

impl GeometryKind {
	/// Half-extents of the primitive's footprint on the floor plane (x, z).
	pub fn footprint(&self) -> (f64, f64) {
		match *self {
			Self::Box { width, depth, .. } => (width / 2.0, depth / 2.0),
			Self::Sphere { radius }
			| Self::Cylinder { radius, .. }
			| Self::Cone { radius, .. }
			| Self::Octahedron { radius } => (radius, radius),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub geometry: GeometryKind,
	pub color: &'static str,
}

const fn cylinder(sides: u32) -> GeometryKind {
	GeometryKind::Cylinder {
		radius: 0.5,
		height: 1.0,
		sides,
	}
}

const fn cube(width: f64, height: f64, depth: f64) -> GeometryKind {
	GeometryKind::Box {
		width,
		height,
		depth,
	}
}

pub const DEFAULT_STYLE: NodeStyle = NodeStyle {
	geometry: cube(0.5, 0.5, 0.5),
	color: "gray",
};

/// Never fails: unknown categories fall back to [`DEFAULT_STYLE`].
pub fn resolve_style(category: &NodeCategory) -> NodeStyle {
	let (geometry, color) = match category {
		NodeCategory::Hallway => (cube(1.0, 1.0, 1.0), "#0a2ce1"),
		NodeCategory::ConferenceRoom => (cube(2.0, 1.0, 1.0), "#25982a"),
		NodeCategory::Department => (GeometryKind::Sphere { radius: 0.5 }, "#e04545"),
		NodeCategory::Elevator => (cylinder(32), "#da8f08"),
		NodeCategory::Exit => (cylinder(6), "#ddde1f"),
		NodeCategory::InfoDesk => (
			GeometryKind::Cone {
				radius: 0.5,
				height: 1.0,
				sides: 3,
			},
			"#1fe18a",
		),
		NodeCategory::Lab => (GeometryKind::Octahedron { radius: 0.5 }, "#9608da"),
		NodeCategory::Restroom => (cube(1.0, 1.0, 1.0), "#5cdbda"),
		NodeCategory::Bathroom => (cube(1.0, 1.0, 1.0), "#ce24d4"),
		NodeCategory::Retail => (cylinder(8), "#0b6009"),
		NodeCategory::Stairs => (cylinder(5), "#82a7f6"),
		NodeCategory::Service => (cylinder(7), "#67c537"),
		NodeCategory::Other(_) => return DEFAULT_STYLE,
	};
	NodeStyle { geometry, color }
}
