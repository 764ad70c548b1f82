use super::*;
use crate::domain::*;
use crate::error::*;
use crate::util::*;
use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::factorization::CscCholesky;
use nalgebra_sparse::{CooMatrix, CscMatrix};

/// 5 point stencil neighbors, tried left, up, right, down.
pub const NEIGHBOR_OFFSETS: [[i32; 2]; 4] = [[-1, 0], [0, -1], [1, 0], [0, 1]];

/// Poisson solver for one domain.
///
/// Row `i` of the system belongs to the `i`-th domain point in canonical
/// order. The Laplacian is assembled and factorized once by `compute`,
/// after which `solve` may be called any number of times with different
/// boundary and guidance strategies, e.g. once per color channel.
///
/// Pixels on the image border simply have fewer neighbor terms,
/// there is no reflection or wrap around.
///
/// The factorization works on a nested dissection reordering of the
/// rows, `solve_columns` maps right hand sides and solutions through it.
pub struct PoissonSolver {
    domain: Domain,
    rows: Vec<Point>,
    aabb: AABB,
    mask: DomainMask,
    laplacian: Option<CscMatrix<f64>>,
    order: Vec<usize>,
    factorization: Option<CscCholesky<f64>>,
}

impl PoissonSolver {
    /// Take ownership of a domain and its mask over a
    /// `size = (width, height)` image. No numeric work happens here.
    pub fn new(
        domain: Domain,
        size: (u32, u32),
        mask: DomainMask,
    ) -> Result<Self> {
        if domain.is_empty() {
            return Err(Error::EmptyDomain);
        }
        let (width, height) = size;
        if (mask.width(), mask.height()) != size {
            return Err(Error::dimension(
                format!("{width}x{height} mask"),
                format!("{}x{} mask", mask.width(), mask.height()),
            ));
        }
        mask.check_consistency(&domain)?;

        tracing::debug!(
            points = domain.len(),
            width,
            height,
            "poisson solver created"
        );
        let rows = domain.iter().copied().collect();
        Ok(PoissonSolver {
            domain,
            rows,
            aabb: AABB::from_size(width, height),
            mask,
            laplacian: None,
            order: Vec::new(),
            factorization: None,
        })
    }

    /// Convenience constructor that builds the mask.
    pub fn from_domain(domain: Domain, size: (u32, u32)) -> Result<Self> {
        let mask = DomainMask::new(size.0, size.1, &domain)?;
        Self::new(domain, size, mask)
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn mask(&self) -> &DomainMask {
        &self.mask
    }

    /// Domain points in row order.
    pub fn rows(&self) -> &[Point] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Assembled Laplacian, available after `compute`.
    pub fn laplacian(&self) -> Option<&CscMatrix<f64>> {
        self.laplacian.as_ref()
    }

    /// Factorization order, `order()[k]` is the row eliminated `k`-th.
    /// Empty before `compute`.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_computed(&self) -> bool {
        self.factorization.is_some()
    }

    /// 4, minus one when on the left or right edge,
    /// minus one when on the top or bottom edge.
    pub fn num_neighbors(&self, p: Point) -> usize {
        let c = p.coord();
        let mut n = 4;
        if self.aabb.on_edge(&c, 0) {
            n -= 1;
        }
        if self.aabb.on_edge(&c, 1) {
            n -= 1;
        }
        n
    }

    /// Axis aligned neighbors inside the image, domain membership ignored.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        let c = p.coord();
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |o| c + Coord::new(o[0], o[1]))
            .filter(|n| self.aabb.contains(n))
            .filter_map(|n| Point::from_coord(&n))
    }

    /// Assemble the Laplacian over the domain and factorize it.
    #[tracing::instrument(skip(self), fields(points = self.rows.len()))]
    pub fn compute(&mut self) -> Result<()> {
        profiling::scope!("poisson_solver: compute");
        let n = self.rows.len();
        let mut row_indices = Vec::with_capacity(5 * n);
        let mut col_indices = Vec::with_capacity(5 * n);
        let mut values = Vec::with_capacity(5 * n);
        for (i, p) in self.rows.iter().enumerate() {
            row_indices.push(i);
            col_indices.push(i);
            values.push(self.num_neighbors(*p) as f64);
            for q in self.neighbors(*p) {
                if let Some(j) = self.mask.index(q) {
                    row_indices.push(i);
                    col_indices.push(j);
                    values.push(-1.0);
                }
            }
        }

        self.check_anchored()?;

        let order = nested_dissection(&self.rows);
        let mut position = vec![0; n];
        for (k, &i) in order.iter().enumerate() {
            position[i] = k;
        }
        let permuted = to_csc(
            n,
            row_indices.iter().map(|&i| position[i]).collect(),
            col_indices.iter().map(|&j| position[j]).collect(),
            values.clone(),
        )?;
        let laplacian = to_csc(n, row_indices, col_indices, values)?;

        let factorization = {
            profiling::scope!("poisson_solver: factor");
            CscCholesky::factor(&permuted).map_err(|e| {
                Error::singular(format!("cholesky factorization failed: {e:?}"))
            })?
        };
        tracing::debug!(
            nnz = laplacian.nnz(),
            factor_nnz = factorization.l().nnz(),
            "laplacian factorized"
        );

        self.laplacian = Some(laplacian);
        self.order = order;
        self.factorization = Some(factorization);
        Ok(())
    }

    /// Every connected piece of the domain needs at least one row that
    /// is strictly diagonally dominant, otherwise that block of the
    /// Laplacian has constants in its null space.
    fn check_anchored(&self) -> Result<()> {
        let n = self.rows.len();
        let mut visited = vec![false; n];
        let mut stack = Vec::new();
        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            stack.push(start);
            let mut anchored = false;
            while let Some(i) = stack.pop() {
                let p = self.rows[i];
                let mut inside = 0;
                for q in self.neighbors(p) {
                    if let Some(j) = self.mask.index(q) {
                        inside += 1;
                        if !visited[j] {
                            visited[j] = true;
                            stack.push(j);
                        }
                    }
                }
                if self.num_neighbors(p) > inside {
                    anchored = true;
                }
            }
            if !anchored {
                return Err(Error::singular(format!(
                    "domain component containing {} has no boundary pixels",
                    self.rows[start]
                )));
            }
        }
        Ok(())
    }

    /// Right hand side for one solve: Dirichlet values of every
    /// neighbor outside the domain plus the guidance along every edge.
    pub fn right_hand_side<B, G>(
        &self,
        dirichlet: &B,
        guidance: &G,
    ) -> DVector<f64>
    where
        B: BoundaryCondition + ?Sized,
        G: GuidanceField + ?Sized,
    {
        profiling::scope!("poisson_solver: right_hand_side");
        let mut b = DVector::zeros(self.rows.len());
        for (i, p) in self.rows.iter().enumerate() {
            for q in self.neighbors(*p) {
                if self.mask.index(q).is_none() {
                    b[i] += dirichlet.value(q);
                }
            }
            for q in self.neighbors(*p) {
                b[i] += guidance.gradient(*p, q);
            }
        }
        tracing::trace!(rows = b.len(), "right hand side assembled");
        b
    }

    /// Solve with the stored factorization.
    /// Returns one value per domain point in canonical order.
    pub fn solve<B, G>(
        &self,
        dirichlet: &B,
        guidance: &G,
    ) -> Result<DVector<f64>>
    where
        B: BoundaryCondition + ?Sized,
        G: GuidanceField + ?Sized,
    {
        let b = self.right_hand_side(dirichlet, guidance);
        let rhs = DMatrix::from_column_slice(b.len(), 1, b.as_slice());
        let x = self.solve_columns(&rhs)?;
        Ok(x.column(0).into_owned())
    }

    /// Solve for several right hand sides at once, one per column.
    pub fn solve_columns(&self, rhs: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        profiling::scope!("poisson_solver: solve");
        let factorization =
            self.factorization.as_ref().ok_or(Error::NotComputed)?;
        if rhs.nrows() != self.rows.len() {
            return Err(Error::dimension(
                format!("{} rows", self.rows.len()),
                format!("{} rows", rhs.nrows()),
            ));
        }
        let permuted =
            DMatrix::from_fn(rhs.nrows(), rhs.ncols(), |k, c| {
                rhs[(self.order[k], c)]
            });
        let y = factorization.solve(&permuted);
        let mut x = DMatrix::zeros(rhs.nrows(), rhs.ncols());
        for (k, &i) in self.order.iter().enumerate() {
            x.row_mut(i).copy_from(&y.row(k));
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(Error::singular("solution is not finite"));
        }
        Ok(x)
    }
}

fn to_csc(
    n: usize,
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<f64>,
) -> Result<CscMatrix<f64>> {
    let coo = CooMatrix::try_from_triplets(
        n,
        n,
        row_indices,
        col_indices,
        values,
    )
    .map_err(|e| Error::inconsistent_mask(format!("{e:?}")))?;
    Ok(CscMatrix::from(&coo))
}
