//! Export functions for hull results
//!
//! These are the renderer-facing end of the crate: they only read the face
//! list of a [`HullResult`] and never touch the builder.

use crate::Result;
use crate::result::HullResult;
use crate::types::Point3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Length of the normal ticks, relative to the hull's bounding extent
const NORMAL_TICK_SCALE: f64 = 0.05;

/// Export a hull to OBJ format
///
/// The OBJ format is a simple text format for 3D models.
/// It includes vertices (v), one normal per face (vn), and faces (f).
pub fn export_obj<P: AsRef<Path>>(result: &HullResult, path: P) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    let (vertices, triangles) = result.to_indexed();

    writeln!(file, "# Convex Hull OBJ Export")?;
    writeln!(file, "# Status: {}", result.status())?;
    writeln!(file, "# Vertices: {}", vertices.len())?;
    writeln!(file, "# Faces: {}", triangles.len())?;
    writeln!(file)?;

    for v in &vertices {
        writeln!(file, "v {} {} {}", v.x, v.y, v.z)?;
    }
    writeln!(file)?;

    for face in result.faces() {
        let n = face.normal();
        writeln!(file, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    writeln!(file)?;

    // OBJ uses 1-based indexing
    for (i, [a, b, c]) in triangles.iter().enumerate() {
        writeln!(
            file,
            "f {}//{} {}//{} {}//{}",
            a + 1,
            i + 1,
            b + 1,
            i + 1,
            c + 1,
            i + 1
        )?;
    }

    file.flush()?;
    Ok(())
}

fn json_points(points: impl IntoIterator<Item = Point3>) -> String {
    points
        .into_iter()
        .map(|p| format!("[{}, {}, {}]", p.x, p.y, p.z))
        .collect::<Vec<_>>()
        .join(",\n        ")
}

/// Export a hull wireframe to HTML with a Three.js viewer
///
/// Draws the input `points`, the three edges of every face and, with
/// `show_normals`, a short tick along each face normal from its centroid.
pub fn export_html<P: AsRef<Path>>(
    result: &HullResult,
    points: &[Point3],
    path: P,
    title: &str,
    show_normals: bool,
) -> Result<()> {
    let mut file = File::create(path)?;

    let points_json = json_points(points.iter().copied());
    let edges_json = json_points(result.edge_segments().into_iter().flatten());

    let extent = crate::geometry::bounding_extent(points).max(f64::EPSILON);
    let normals_json = if show_normals {
        json_points(result.faces().iter().flat_map(|f| {
            let c = f.centroid();
            [c, c.add(&f.normal().scale(extent * NORMAL_TICK_SCALE))]
        }))
    } else {
        String::new()
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            overflow: hidden;
            font-family: Arial, sans-serif;
        }}
        #info {{
            position: absolute;
            top: 10px;
            left: 10px;
            background: rgba(0, 0, 0, 0.7);
            color: white;
            padding: 15px;
            border-radius: 5px;
            font-size: 14px;
            z-index: 100;
        }}
        #info h2 {{
            margin: 0 0 10px 0;
            font-size: 18px;
        }}
        #info p {{
            margin: 5px 0;
        }}
    </style>
</head>
<body>
    <div id="info">
        <h2>{title}</h2>
        <p>Status: {status}</p>
        <p>Input points: {num_points}</p>
        <p>Faces: {num_faces}</p>
        <p>Iterations: {iterations} ({elapsed_ms} ms)</p>
        <p>Volume: {volume:.6}</p>
        <p>Surface Area: {surface_area:.6}</p>
    </div>

    <script type="importmap">
    {{
        "imports": {{
            "three": "https://cdn.jsdelivr.net/npm/three@0.170.0/build/three.module.js",
            "three/addons/": "https://cdn.jsdelivr.net/npm/three@0.170.0/examples/jsm/"
        }}
    }}
    </script>

    <script type="module">
        import * as THREE from 'three';
        import {{ OrbitControls }} from 'three/addons/controls/OrbitControls.js';

        const points = [
        {points_json}
        ];
        const edges = [
        {edges_json}
        ];
        const normals = [
        {normals_json}
        ];

        const scene = new THREE.Scene();
        scene.background = new THREE.Color(0x1a1a1a);

        function segments(data, color) {{
            const geometry = new THREE.BufferGeometry();
            geometry.setAttribute('position', new THREE.Float32BufferAttribute(data.flat(), 3));
            return new THREE.LineSegments(geometry, new THREE.LineBasicMaterial({{ color }}));
        }}

        const cloud = new THREE.BufferGeometry();
        cloud.setAttribute('position', new THREE.Float32BufferAttribute(points.flat(), 3));
        cloud.computeBoundingBox();
        const box = cloud.boundingBox;
        const center = new THREE.Vector3();
        box.getCenter(center);
        const size = new THREE.Vector3();
        box.getSize(size);
        const maxDim = Math.max(size.x, size.y, size.z, 1e-6);

        scene.add(new THREE.Points(cloud, new THREE.PointsMaterial({{
            color: 0xff6b6b,
            size: maxDim * 0.01,
            sizeAttenuation: true
        }})));
        scene.add(segments(edges, 0xffffff));
        if (normals.length > 0) {{
            scene.add(segments(normals, 0x2ecc71));
        }}
        scene.add(new THREE.AxesHelper(maxDim * 0.5));

        const camera = new THREE.PerspectiveCamera(
            75,
            window.innerWidth / window.innerHeight,
            maxDim * 0.001,
            maxDim * 100
        );
        const fov = camera.fov * (Math.PI / 180);
        const distance = 2.5 * Math.abs(maxDim / 2 / Math.tan(fov / 2));
        camera.position.set(center.x + distance * 0.5, center.y + distance * 0.5, center.z + distance);
        camera.lookAt(center);

        const renderer = new THREE.WebGLRenderer({{ antialias: true }});
        renderer.setSize(window.innerWidth, window.innerHeight);
        document.body.appendChild(renderer.domElement);

        const controls = new OrbitControls(camera, renderer.domElement);
        controls.target.copy(center);
        controls.enableDamping = true;
        controls.dampingFactor = 0.05;

        window.addEventListener('resize', () => {{
            camera.aspect = window.innerWidth / window.innerHeight;
            camera.updateProjectionMatrix();
            renderer.setSize(window.innerWidth, window.innerHeight);
        }});

        function animate() {{
            requestAnimationFrame(animate);
            controls.update();
            renderer.render(scene, camera);
        }}

        animate();
    </script>
</body>
</html>"#,
        title = title,
        status = result.status(),
        num_points = points.len(),
        num_faces = result.num_faces(),
        iterations = result.iterations(),
        elapsed_ms = result.elapsed().as_millis(),
        volume = result.volume(),
        surface_area = result.surface_area(),
        points_json = points_json,
        edges_json = edges_json,
        normals_json = normals_json,
    );

    file.write_all(html.as_bytes())?;

    Ok(())
}
