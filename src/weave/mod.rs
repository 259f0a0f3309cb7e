pub mod traverse;

use std::fmt;

use crate::error::{FiberError, Result, WaterlineError};
use crate::fiber::{Fiber, Interval};
use crate::math::Point3;
use crate::topology::{VertexId, VertexType, WeaveStore};

/// Weave-graph builder for one waterline slice.
///
/// Consumes x- and y-parallel fibers, builds the planar subdivision of
/// their intervals and pairwise crossings, and extracts the bounded-region
/// boundaries as point loops. Usage is three-phase: [`add_fiber`] for every
/// input fiber, one [`build`], then [`face_traverse`] and [`loops`].
///
/// [`add_fiber`]: Weave::add_fiber
/// [`build`]: Weave::build
/// [`face_traverse`]: Weave::face_traverse
/// [`loops`]: Weave::loops
#[derive(Debug, Default)]
pub struct Weave {
    store: WeaveStore,
    xfibers: Vec<Fiber>,
    yfibers: Vec<Fiber>,
    loops: Vec<Vec<VertexId>>,
    built: bool,
}

impl Weave {
    /// Creates an empty weave.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fiber, classifying it by direction.
    ///
    /// # Errors
    ///
    /// Returns [`FiberError::Empty`] for a fiber without intervals and
    /// [`FiberError::InvalidDirection`] for one that is neither x- nor
    /// y-parallel.
    pub fn add_fiber(&mut self, fiber: Fiber) -> Result<()> {
        if fiber.is_empty() {
            return Err(FiberError::Empty.into());
        }
        if fiber.x_parallel() {
            self.xfibers.push(fiber);
            Ok(())
        } else if fiber.y_parallel() {
            self.yfibers.push(fiber);
            Ok(())
        } else {
            Err(FiberError::InvalidDirection.into())
        }
    }

    /// Builds the weave graph from the registered fibers.
    ///
    /// Every interval's endpoints become CL vertices connected along the
    /// interval; every x-interval/y-interval crossing becomes a fresh INT
    /// vertex spliced into both interval paths, so that each interval's
    /// recorded vertices stay one coordinate-ordered path throughout.
    ///
    /// # Errors
    ///
    /// Returns [`WaterlineError::AlreadyBuilt`] on a second call and
    /// [`FiberError::Empty`] if a registered fiber has lost its intervals.
    pub fn build(&mut self) -> Result<()> {
        if self.built {
            return Err(WaterlineError::AlreadyBuilt);
        }
        if self.xfibers.iter().chain(&self.yfibers).any(Fiber::is_empty) {
            return Err(FiberError::Empty.into());
        }
        self.built = true;

        let Self {
            store,
            xfibers,
            yfibers,
            ..
        } = self;

        for xf in xfibers.iter_mut() {
            for xi in 0..xf.ints.len() {
                let x_lo = xf.point(xf.ints[xi].lower);
                let x_hi = xf.point(xf.ints[xi].upper);
                let (xmin, xmax) = (x_lo.x.min(x_hi.x), x_lo.x.max(x_hi.x));
                if !xf.ints[xi].in_weave {
                    weave_endpoints(store, &mut xf.ints[xi], x_lo, x_hi, x_lo.x, x_hi.x);
                }
                for yf in yfibers.iter_mut() {
                    // Cheap overlap filter on the y-fiber's fixed coordinate.
                    if yf.p1.x < xmin || yf.p1.x > xmax {
                        continue;
                    }
                    for yi in 0..yf.ints.len() {
                        let y_lo = yf.point(yf.ints[yi].lower);
                        let y_hi = yf.point(yf.ints[yi].upper);
                        let (ymin, ymax) = (y_lo.y.min(y_hi.y), y_lo.y.max(y_hi.y));
                        // Exact test: both fixed coordinates inside the
                        // other interval's span.
                        if xf.p1.y < ymin || xf.p1.y > ymax {
                            continue;
                        }
                        if !yf.ints[yi].in_weave {
                            weave_endpoints(store, &mut yf.ints[yi], y_lo, y_hi, y_lo.y, y_hi.y);
                        }
                        // Each ordered interval pair is visited once, so the
                        // crossing vertex is always new.
                        let pos = Point3::new(yf.p1.x, xf.p1.y, xf.p1.z);
                        let v = store.add_vertex(pos, VertexType::Int);
                        splice_vertex(store, &mut xf.ints[xi], v, pos.x)?;
                        splice_vertex(store, &mut yf.ints[yi], v, pos.y)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// The underlying planar subdivision.
    #[must_use]
    pub fn store(&self) -> &WeaveStore {
        &self.store
    }

    /// The registered x-parallel fibers.
    #[must_use]
    pub fn x_fibers(&self) -> &[Fiber] {
        &self.xfibers
    }

    /// The registered y-parallel fibers.
    #[must_use]
    pub fn y_fibers(&self) -> &[Fiber] {
        &self.yfibers
    }

    /// Multi-line diagnostic report of the graph contents.
    #[must_use]
    pub fn graph_summary(&self) -> String {
        let n = self.store.num_vertices();
        let cl = self.store.vertex_type_count(VertexType::Cl);
        format!(
            "vertices: {n} ({cl} cl, {} internal)\nedges: {}\nfaces: {}",
            n - cl,
            self.store.num_edges(),
            self.store.num_faces()
        )
    }
}

impl fmt::Display for Weave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weave: {} x-fibers, {} y-fibers",
            self.xfibers.len(),
            self.yfibers.len()
        )
    }
}

/// Materializes an interval's endpoints as CL vertices, records them on the
/// interval, and connects them.
fn weave_endpoints(
    store: &mut WeaveStore,
    ival: &mut Interval,
    lo: Point3,
    hi: Point3,
    c_lo: f64,
    c_hi: f64,
) {
    let v_lo = store.add_vertex(lo, VertexType::Cl);
    let v_hi = store.add_vertex(hi, VertexType::Cl);
    ival.insert_vertex(v_lo, c_lo);
    ival.insert_vertex(v_hi, c_hi);
    store.connect(v_lo, v_hi);
    ival.in_weave = true;
}

/// Splices a new vertex into an interval's path at the given coordinate.
///
/// If the vertex lands between two directly connected neighbors, the old
/// edge is replaced by two edges through the new vertex; at the ends of the
/// path only the single existing neighbor is reconnected.
fn splice_vertex(
    store: &mut WeaveStore,
    ival: &mut Interval,
    v: VertexId,
    coord: f64,
) -> Result<()> {
    let idx = ival.insert_vertex(v, coord);
    let below = ival.vertex_below(idx);
    let above = ival.vertex_above(idx);
    if let (Some(b), Some(a)) = (below, above) {
        if store.find_edge(b, a).is_some() {
            store.remove_edge(b, a)?;
        }
    }
    if let Some(b) = below {
        store.connect(b, v);
    }
    if let Some(a) = above {
        store.connect(a, v);
    }
    Ok(())
}
