//! Uniform structured background mesh
//!
//! nx × ny × nz cubic cells of width `h` with 8-node trilinear hexahedral
//! cells. Shape functions are evaluated in the [-1, 1]³ reference frame of
//! the containing cell; gradients are returned in world coordinates.

use crate::error::{Result, SolverError};
use crate::math::{DIM, Real, Vector};

/// Nodes per trilinear hexahedral cell.
pub const NODES_PER_CELL: usize = 8;
/// Mesh faces, ordered -x, +x, -y, +y, -z, +z.
pub const NUM_FACES: usize = 6;

// Local corner offsets, fixed in shape-function ordering.
const NODE_OFFSETS: [[usize; 3]; NODES_PER_CELL] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

// Tensor-product Gauss-Legendre abscissae and weights on [-1, 1].
const GAUSS_1: [(Real, Real); 1] = [(0.0, 2.0)];
const GAUSS_2: [(Real, Real); 2] = [
    (-0.577_350_269_189_625_8, 1.0),
    (0.577_350_269_189_625_8, 1.0),
];
const GAUSS_3: [(Real, Real); 3] = [
    (-0.774_596_669_241_483_4, 5.0 / 9.0),
    (0.0, 8.0 / 9.0),
    (0.774_596_669_241_483_4, 5.0 / 9.0),
];

fn gauss_rule(order: usize) -> Result<&'static [(Real, Real)]> {
    match order {
        1 => Ok(&GAUSS_1),
        2 => Ok(&GAUSS_2),
        3 => Ok(&GAUSS_3),
        _ => Err(SolverError::UnsupportedOrder(order)),
    }
}

/// A seeded particle candidate: quadrature point mapped to world
/// coordinates, with its share of the cell volume.
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    pub position: Vector,
    pub volume: Real,
}

pub struct UniformMesh {
    num_cells: [usize; 3],
    cell_width: Real,
}

impl UniformMesh {
    pub fn new(num_cells: [usize; 3], cell_width: Real) -> Self {
        Self {
            num_cells,
            cell_width,
        }
    }

    pub fn num_cells(&self) -> [usize; 3] {
        self.num_cells
    }

    pub fn cell_width(&self) -> Real {
        self.cell_width
    }

    pub fn total_num_cells(&self) -> usize {
        self.num_cells[0] * self.num_cells[1] * self.num_cells[2]
    }

    pub fn total_num_nodes(&self) -> usize {
        (self.num_cells[0] + 1) * (self.num_cells[1] + 1) * (self.num_cells[2] + 1)
    }

    pub fn nodes_per_cell(&self) -> usize {
        NODES_PER_CELL
    }

    pub fn spatial_dimension(&self) -> usize {
        DIM
    }

    /// Upper corner of the domain (the lower corner is the origin).
    pub fn domain_extent(&self) -> Vector {
        Vector::new(
            self.num_cells[0] as Real * self.cell_width,
            self.num_cells[1] as Real * self.cell_width,
            self.num_cells[2] as Real * self.cell_width,
        )
    }

    #[inline]
    fn node_id(&self, i: usize, j: usize, k: usize) -> usize {
        (k * (self.num_cells[1] + 1) + j) * (self.num_cells[0] + 1) + i
    }

    /// Linear cell index -> (i, j, k) cell coordinates, x fastest.
    pub fn cell_coords(&self, cell_index: usize) -> [usize; 3] {
        let nx = self.num_cells[0];
        let ny = self.num_cells[1];
        [
            cell_index % nx,
            (cell_index / nx) % ny,
            cell_index / (nx * ny),
        ]
    }

    fn cell_center(&self, cell: [usize; 3]) -> Vector {
        Vector::new(
            (cell[0] as Real + 0.5) * self.cell_width,
            (cell[1] as Real + 0.5) * self.cell_width,
            (cell[2] as Real + 0.5) * self.cell_width,
        )
    }

    /// Candidate count per cell for a quadrature order.
    pub fn particles_per_cell(&self, order: usize) -> usize {
        order * order * order
    }

    /// Seed the particle candidates of one cell into `out`.
    ///
    /// Candidates are Gauss points of the reference cell mapped to world
    /// coordinates; each carries the Gauss-weighted share of the cell
    /// volume. Ordering is deterministic (z outer, x inner).
    pub fn seed_cell_candidates(
        &self,
        cell: [usize; 3],
        order: usize,
        out: &mut Vec<Candidate>,
    ) -> Result<()> {
        let rule = gauss_rule(order)?;
        let center = self.cell_center(cell);
        let half_width = 0.5 * self.cell_width;
        let jacobian = half_width * half_width * half_width;

        out.clear();
        for &(zeta, wz) in rule {
            for &(eta, wy) in rule {
                for &(xi, wx) in rule {
                    out.push(Candidate {
                        position: center + half_width * Vector::new(xi, eta, zeta),
                        volume: wx * wy * wz * jacobian,
                    });
                }
            }
        }
        Ok(())
    }

    /// Cell coordinates of the cell containing `position`.
    ///
    /// Positions outside the domain are clamped onto the boundary cells, so
    /// a particle never ends up without a containing cell.
    pub fn locate_particle(&self, position: &Vector) -> [usize; 3] {
        let inv = 1.0 / self.cell_width;
        let mut cell = [0usize; 3];
        for axis in 0..DIM {
            let coord = (position[axis] * inv).floor();
            let clamped = coord.max(0.0).min((self.num_cells[axis] - 1) as Real);
            cell[axis] = clamped as usize;
        }
        cell
    }

    /// Global node ids of a cell, in shape-function ordering.
    pub fn cell_node_ids(&self, cell: [usize; 3], out: &mut [usize; NODES_PER_CELL]) {
        for (slot, offset) in out.iter_mut().zip(NODE_OFFSETS.iter()) {
            *slot = self.node_id(cell[0] + offset[0], cell[1] + offset[1], cell[2] + offset[2]);
        }
    }

    /// Map a world position into the [-1, 1]³ reference frame of `cell`.
    pub fn map_to_reference(&self, position: &Vector, cell: [usize; 3]) -> Vector {
        (position - self.cell_center(cell)) * (2.0 / self.cell_width)
    }

    /// Shape function values at a reference point; they sum to 1.
    pub fn shape_values(&self, reference: &Vector, out: &mut [Real; NODES_PER_CELL]) {
        for (value, offset) in out.iter_mut().zip(NODE_OFFSETS.iter()) {
            let mut product = 1.0;
            for axis in 0..DIM {
                let sign = 2.0 * offset[axis] as Real - 1.0;
                product *= 0.5 * (1.0 + reference[axis] * sign);
            }
            *value = product;
        }
    }

    /// Shape function gradients at a reference point, in world coordinates;
    /// they sum to the zero vector.
    pub fn shape_gradients(&self, reference: &Vector, out: &mut [Vector; NODES_PER_CELL]) {
        let scale = 1.0 / self.cell_width;
        for (gradient, offset) in out.iter_mut().zip(NODE_OFFSETS.iter()) {
            let mut factors = [0.0; DIM];
            let mut signs = [0.0; DIM];
            for axis in 0..DIM {
                signs[axis] = 2.0 * offset[axis] as Real - 1.0;
                factors[axis] = 0.5 * (1.0 + reference[axis] * signs[axis]);
            }
            for axis in 0..DIM {
                let others: Real = (0..DIM)
                    .filter(|&b| b != axis)
                    .map(|b| factors[b])
                    .product();
                gradient[axis] = signs[axis] * others * scale;
            }
        }
    }

    /// Global node ids lying on one of the six mesh faces.
    pub fn face_nodes(&self, face: usize) -> Vec<usize> {
        debug_assert!(face < NUM_FACES);
        let axis = face / 2;
        let plane = if face % 2 == 0 { 0 } else { self.num_cells[axis] };

        let (a, b) = match axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };

        let mut nodes = Vec::with_capacity((self.num_cells[a] + 1) * (self.num_cells[b] + 1));
        for vb in 0..=self.num_cells[b] {
            for va in 0..=self.num_cells[a] {
                let mut coords = [0usize; 3];
                coords[axis] = plane;
                coords[a] = va;
                coords[b] = vb;
                nodes.push(self.node_id(coords[0], coords[1], coords[2]));
            }
        }
        nodes
    }
}
