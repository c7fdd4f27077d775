use xs_a5::{
  a5_to_string, cell_to_boundary, cell_to_children, cell_to_lon_lat, cell_to_parent, get_num_cells, get_resolution,
  is_valid_cell, lon_lat_to_cell, A5Error, A5Index, LonLat,
};

fn main() -> Result<(), A5Error> {
  println!("--- Basic A5 Indexing Example ---");

  // 1. Define a point (e.g., San Francisco City Hall)
  let point = LonLat::new(-122.419277, 37.779265);
  println!("Original Point: Lon {:.6} deg, Lat {:.6} deg", point.lon, point.lat);

  // 2. Find the A5 cell containing this point at resolution 12
  let res = 12;
  let cell: A5Index = lon_lat_to_cell(point, res)?;
  println!("A5 Cell at res {}: {}", res, a5_to_string(cell));
  println!("Cells at this resolution: {}", get_num_cells(res)?);

  // 3. Validate the cell
  if !is_valid_cell(cell) {
    println!("Cell {} is NOT valid.", cell);
    return Ok(());
  }
  println!("Cell Resolution: {}", get_resolution(cell));

  // 4. Get the center of the cell
  let center = cell_to_lon_lat(cell)?;
  println!("Cell Center: Lon {:.6} deg, Lat {:.6} deg", center.lon, center.lat);

  // 5. Get the boundary of the cell
  let boundary = cell_to_boundary(cell)?;
  println!("Cell Boundary ({} vertices):", boundary.len());
  for (i, vertex) in boundary.iter().enumerate() {
    println!("  Vertex {}: Lon {:.6} deg, Lat {:.6} deg", i, vertex.lon, vertex.lat);
  }

  println!("\n--- Hierarchy Example ---");
  // 6. Get parent cell at resolution 8
  let parent_res = 8;
  let parent_cell = cell_to_parent(cell, Some(parent_res))?;
  println!("Parent of {} at res {}: {}", cell, parent_res, parent_cell);

  // 7. List the children one level down
  let children = cell_to_children(cell, None)?;
  println!("Children of {} at res {}:", cell, res + 1);
  for child in &children {
    println!("  {}", child);
  }

  Ok(())
}
