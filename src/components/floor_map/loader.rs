//! Node and edge table loading.
//!
//! Both tables are comma-separated text with a header row. Each is fetched and
//! parsed on its own; neither waits on the other. A row that cannot yield a
//! usable record is logged and dropped rather than admitted with a
//! non-finite coordinate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use super::style::NodeCategory;
use super::types::{GraphEdge, GraphNode, MapCoord};

const NODE_COLUMNS: usize = 8;
const EDGE_COLUMNS: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	#[error("request to {url} failed: {source}")]
	Request {
		url: String,
		#[source]
		source: gloo_net::Error,
	},
	#[error("{url} answered with status {status}")]
	Status { url: String, status: u16 },
	#[error("could not read body of {url}: {source}")]
	Body {
		url: String,
		#[source]
		source: gloo_net::Error,
	},
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
	#[error("missing {0}")]
	MissingField(&'static str),
	#[error("{column} is not a number: {value:?}")]
	InvalidNumber { column: &'static str, value: String },
	#[error("{column} is not finite: {value:?}")]
	NonFinite { column: &'static str, value: String },
}

/// Liveness flag shared with in-flight loads. Results that resolve after
/// [`LoadGuard::cancel`] must be discarded.
#[derive(Clone, Debug)]
pub struct LoadGuard(Arc<AtomicBool>);

impl Default for LoadGuard {
	fn default() -> Self {
		Self(Arc::new(AtomicBool::new(true)))
	}
}

impl LoadGuard {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_live(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}

	pub fn cancel(&self) {
		self.0.store(false, Ordering::Relaxed);
	}
}

/// Data rows with their 1-based line numbers; header and blank lines skipped.
fn data_rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
	text.trim()
		.split('\n')
		.map(|line| line.strip_suffix('\r').unwrap_or(line))
		.enumerate()
		.skip(1)
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(idx, line)| (idx + 1, line))
}

/// Splits on commas, padding short rows with empty fields.
fn split_fields(line: &str, columns: usize) -> Vec<&str> {
	let mut fields: Vec<&str> = line.split(',').collect();
	if fields.len() < columns {
		fields.resize(columns, "");
	}
	fields
}

fn parse_coordinate(column: &'static str, value: &str) -> Result<f64, RowError> {
	let value = value.trim();
	if value.is_empty() {
		return Err(RowError::MissingField(column));
	}
	let parsed: f64 = value.parse().map_err(|_| RowError::InvalidNumber {
		column,
		value: value.to_string(),
	})?;
	if !parsed.is_finite() {
		return Err(RowError::NonFinite {
			column,
			value: value.to_string(),
		});
	}
	Ok(parsed)
}

fn node_from_fields(fields: &[&str]) -> Result<GraphNode, RowError> {
	if fields[0].is_empty() {
		return Err(RowError::MissingField("id"));
	}
	Ok(GraphNode {
		id: fields[0].to_string(),
		coord: MapCoord {
			x: parse_coordinate("x", fields[1])?,
			y: parse_coordinate("y", fields[2])?,
		},
		floor: fields[3].to_string(),
		building: fields[4].to_string(),
		category: NodeCategory::from_code(fields[5]),
		long_name: fields[6].to_string(),
		short_name: fields[7].to_string(),
	})
}

fn edge_from_fields(fields: &[&str]) -> Result<GraphEdge, RowError> {
	if fields[1].is_empty() {
		return Err(RowError::MissingField("start"));
	}
	if fields[2].is_empty() {
		return Err(RowError::MissingField("end"));
	}
	Ok(GraphEdge {
		id: fields[0].to_string(),
		start: fields[1].to_string(),
		end: fields[2].to_string(),
	})
}

/// Parses the node table, keeping only rows on `active_floor`.
pub fn parse_nodes(text: &str, active_floor: &str) -> Vec<GraphNode> {
	let mut nodes = Vec::new();
	for (line_no, line) in data_rows(text) {
		let fields = split_fields(line, NODE_COLUMNS);
		if fields[3] != active_floor {
			continue;
		}
		match node_from_fields(&fields) {
			Ok(node) => nodes.push(node),
			Err(err) => warn!("nodes line {line_no}: {err}, row dropped"),
		}
	}
	nodes
}

pub fn parse_edges(text: &str) -> Vec<GraphEdge> {
	let mut edges = Vec::new();
	for (line_no, line) in data_rows(text) {
		match edge_from_fields(&split_fields(line, EDGE_COLUMNS)) {
			Ok(edge) => edges.push(edge),
			Err(err) => warn!("edges line {line_no}: {err}, row dropped"),
		}
	}
	edges
}

pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
	let resp = gloo_net::http::Request::get(url)
		.send()
		.await
		.map_err(|source| LoadError::Request {
			url: url.to_string(),
			source,
		})?;
	if !resp.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: resp.status(),
		});
	}
	resp.text().await.map_err(|source| LoadError::Body {
		url: url.to_string(),
		source,
	})
}

pub async fn load_nodes(url: &str, active_floor: &str) -> Result<Vec<GraphNode>, LoadError> {
	let text = fetch_text(url).await?;
	Ok(parse_nodes(&text, active_floor))
}

pub async fn load_edges(url: &str) -> Result<Vec<GraphEdge>, LoadError> {
	let text = fetch_text(url).await?;
	Ok(parse_edges(&text))
}

#[cfg(test)]
mod tests {
	use super::*;

	const NODES: &str = "nodeID,xcoord,ycoord,floor,building,nodeType,longName,shortName\r\n\
		CHALL001L1,1200,850,L1,45 Francis,HALL,Hallway 1 Floor 1,Hall 1\r\n\
		CELEV00AL2,2255,849,L2,Tower,ELEV,Elevator A Floor 2,Elevator A\r\n";

	#[test]
	fn keeps_only_active_floor_and_strips_carriage_returns() {
		let nodes = parse_nodes(NODES, "L1");
		assert_eq!(nodes.len(), 1);
		let node = &nodes[0];
		assert_eq!(node.id, "CHALL001L1");
		assert_eq!(node.coord, MapCoord { x: 1200.0, y: 850.0 });
		assert_eq!(node.floor, "L1");
		assert_eq!(node.building, "45 Francis");
		assert_eq!(node.category, NodeCategory::Hallway);
		assert_eq!(node.long_name, "Hallway 1 Floor 1");
		assert_eq!(node.short_name, "Hall 1");
		assert!(!node.short_name.contains('\r'));
	}

	#[test]
	fn header_only_table_is_empty() {
		assert!(parse_nodes("id,x,y,floor,building,type,longName,shortName\n", "L1").is_empty());
		assert!(parse_edges("id,start,end").is_empty());
		assert!(parse_edges("").is_empty());
	}

	#[test]
	fn non_numeric_coordinates_are_dropped() {
		let text = "h\nA,12,abc,L1,B,HALL,Long,Short\nB,1,2,L1,B,HALL,Long,Short\nC,inf,2,L1,B,HALL,L,S";
		let nodes = parse_nodes(text, "L1");
		assert_eq!(nodes.len(), 1);
		assert_eq!(nodes[0].id, "B");
	}

	#[test]
	fn short_rows_get_empty_trailing_fields() {
		let nodes = parse_nodes("h\nA,10,20,L1", "L1");
		assert_eq!(nodes.len(), 1);
		assert_eq!(nodes[0].building, "");
		assert_eq!(nodes[0].category, NodeCategory::Other(String::new()));
		assert_eq!(nodes[0].short_name, "");
	}

	#[test]
	fn row_errors_name_the_column() {
		let fields = split_fields("A,,5,L1", NODE_COLUMNS);
		assert_eq!(node_from_fields(&fields), Err(RowError::MissingField("x")));
		let fields = split_fields("A,3,x5,L1", NODE_COLUMNS);
		assert_eq!(
			node_from_fields(&fields),
			Err(RowError::InvalidNumber {
				column: "y",
				value: "x5".into()
			})
		);
	}

	#[test]
	fn parses_edges_and_skips_blank_lines() {
		let text = "edgeID,startNode,endNode\r\nE1,A,B\r\n\r\nE2,B,C\r\nE3,C\r\n";
		let edges = parse_edges(text);
		assert_eq!(
			edges,
			vec![
				GraphEdge {
					id: "E1".into(),
					start: "A".into(),
					end: "B".into()
				},
				GraphEdge {
					id: "E2".into(),
					start: "B".into(),
					end: "C".into()
				},
			]
		);
	}

	#[test]
	fn guard_is_shared_between_clones() {
		let guard = LoadGuard::new();
		let task = guard.clone();
		assert!(task.is_live());
		guard.cancel();
		assert!(!task.is_live());
	}
}
