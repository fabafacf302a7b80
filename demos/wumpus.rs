//! A cave explored by an agent which only moves to cells it can prove free of pits.
//!
//! The cave is a grid with pits placed at random (never at the entrance).
//! A breeze is felt in any cell next to a pit, and on visiting a cell the agent asserts:
//! - That the cell has no pit (the agent would have fallen in, otherwise).
//! - Whether a breeze is felt in the cell.
//! - That a breeze is felt in the cell exactly when some neighbouring cell has a pit.
//!
//! The agent then asks the knowledge base whether each unvisited neighbour of a visited cell is free of pits, and visits those which are.
//!
//! Run with `cargo run --example wumpus -- <width> <height>`.

use std::collections::BTreeSet;

use rand::Rng;

use otter_entail::{
    knowledge_base::KnowledgeBase,
    structures::sentence::{Sentence, Symbol},
};

type Cell = (usize, usize);

struct Cave {
    width: usize,
    height: usize,
    pits: BTreeSet<Cell>,
    gold: Cell,
}

impl Cave {
    /// A cave of at least two cells, so the gold is never at the entrance.
    fn random(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        let width = width.max(1);
        let height = match width {
            1 => height.max(2),
            _ => height.max(1),
        };

        let mut pits = BTreeSet::default();
        for y in 0..height {
            for x in 0..width {
                if (x, y) != (0, 0) && rng.random_bool(0.2) {
                    pits.insert((x, y));
                }
            }
        }

        let index = rng.random_range(1..width * height);
        let gold = (index % width, index / width);

        Cave {
            width,
            height,
            pits,
            gold,
        }
    }

    fn neighbours(&self, (x, y): Cell) -> Vec<Cell> {
        let mut neighbours = Vec::default();
        if x > 0 {
            neighbours.push((x - 1, y));
        }
        if x + 1 < self.width {
            neighbours.push((x + 1, y));
        }
        if y > 0 {
            neighbours.push((x, y - 1));
        }
        if y + 1 < self.height {
            neighbours.push((x, y + 1));
        }
        neighbours
    }

    fn breeze(&self, cell: Cell) -> bool {
        self.neighbours(cell)
            .iter()
            .any(|neighbour| self.pits.contains(neighbour))
    }

    fn render(&self, visited: &BTreeSet<Cell>) {
        for y in (0..self.height).rev() {
            let mut row = String::new();
            for x in 0..self.width {
                let cell = (x, y);
                row.push(if visited.contains(&cell) { '[' } else { ' ' });
                row.push(if self.pits.contains(&cell) { 'P' } else { '-' });
                row.push(if self.gold == cell { 'G' } else { ' ' });
                row.push(if visited.contains(&cell) { ']' } else { ' ' });
            }
            println!("{row}");
        }
    }
}

fn pit((x, y): Cell) -> Sentence {
    Sentence::symbol(Symbol::new(format!("P{x}_{y}")))
}

fn breeze((x, y): Cell) -> Sentence {
    Sentence::symbol(Symbol::new(format!("B{x}_{y}")))
}

struct Agent {
    kb: KnowledgeBase,
    visited: BTreeSet<Cell>,
}

impl Agent {
    fn visit(&mut self, cave: &Cave, cell: Cell) {
        self.visited.insert(cell);

        self.kb.add(Sentence::negation(pit(cell)));
        self.kb.add(Sentence::equivalence(
            breeze(cell),
            Sentence::disjunction(cave.neighbours(cell).into_iter().map(pit)),
        ));

        match cave.breeze(cell) {
            true => self.kb.add(breeze(cell)),
            false => self.kb.add(Sentence::negation(breeze(cell))),
        };
    }

    /// The first unvisited cell next to a visited cell which is provably free of pits.
    fn next_safe(&mut self, cave: &Cave) -> Option<Cell> {
        let candidates = self
            .visited
            .iter()
            .flat_map(|cell| cave.neighbours(*cell))
            .filter(|cell| !self.visited.contains(cell))
            .collect::<BTreeSet<_>>();

        for cell in candidates {
            match self.kb.derive(&Sentence::negation(pit(cell))) {
                Ok(true) => {
                    println!("{:?} is safe", cell);
                    return Some(cell);
                }
                Ok(false) => println!("{:?} may have a pit", cell),
                Err(e) => println!("{:?} is unknown: {e}", cell),
            }
        }
        None
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let width = args.next().and_then(|w| w.parse().ok()).unwrap_or(3);
    let height = args.next().and_then(|h| h.parse().ok()).unwrap_or(3);

    let mut rng = rand::rng();
    let cave = Cave::random(width, height, &mut rng);

    let mut agent = Agent {
        kb: KnowledgeBase::default(),
        visited: BTreeSet::default(),
    };
    agent.visit(&cave, (0, 0));

    while let Some(cell) = agent.next_safe(&cave) {
        agent.visit(&cave, cell);
        if cell == cave.gold {
            println!("Found the gold at {cell:?}");
            break;
        }
    }

    println!();
    cave.render(&agent.visited);
    println!();
    println!("{}", agent.kb);
}
