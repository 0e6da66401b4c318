//! Point sources: raw vertex buffers and Wavefront OBJ files

use crate::types::Point3;
use crate::{HullError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Size in bytes of an `f32` xyz position
const POSITION_SIZE: usize = 3 * std::mem::size_of::<f32>();

/// Extract positions from an interleaved vertex buffer.
///
/// Each vertex occupies `stride` bytes; its position is three little-endian
/// `f32`s starting `position_offset` bytes into the vertex. Positions are
/// widened to `f64`.
pub fn points_from_vertex_buffer(
    bytes: &[u8],
    stride: usize,
    position_offset: usize,
) -> Result<Vec<Point3>> {
    let invalid = || HullError::InvalidVertexBuffer {
        len: bytes.len(),
        stride,
        offset: position_offset,
    };

    if stride == 0 || position_offset + POSITION_SIZE > stride || bytes.len() % stride != 0 {
        return Err(invalid());
    }

    let read_f32 = |chunk: &[u8], at: usize| {
        chunk
            .get(at..at + 4)
            .and_then(|b| b.try_into().ok())
            .map(f32::from_le_bytes)
    };

    bytes
        .chunks_exact(stride)
        .map(|vertex| {
            let o = position_offset;
            match (
                read_f32(vertex, o),
                read_f32(vertex, o + 4),
                read_f32(vertex, o + 8),
            ) {
                (Some(x), Some(y), Some(z)) => Ok(Point3::from_f32(x, y, z)),
                _ => Err(invalid()),
            }
        })
        .collect()
}

/// Load vertices from a Wavefront OBJ file
///
/// Parses OBJ files and extracts vertex coordinates (lines starting with "v").
/// Ignores faces, normals, texture coordinates, and other OBJ features.
pub fn load_obj_vertices<P: AsRef<Path>>(path: P) -> Result<Vec<Point3>> {
    let file = File::open(path)?;
    read_obj_vertices(BufReader::new(file))
}

fn read_obj_vertices<R: BufRead>(reader: R) -> Result<Vec<Point3>> {
    let mut vertices = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if !line.starts_with("v ") {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() >= 4
            && let (Ok(x), Ok(y), Ok(z)) = (
                parts[1].parse::<f64>(),
                parts[2].parse::<f64>(),
                parts[3].parse::<f64>(),
            )
        {
            vertices.push(Point3::new(x, y, z));
        }
    }

    if vertices.is_empty() {
        Err(HullError::NoVertices)
    } else {
        Ok(vertices)
    }
}
