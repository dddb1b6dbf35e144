/// Overlap checks between entity collections.  Pure: callers decide what a
/// hit does to the world.

use crate::entities::{Bullet, Enemy, Player};

/// Indices (ascending, no duplicates) of everything involved in a
/// bullet-enemy hit this tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hits {
    pub enemies: Vec<usize>,
    pub bullets: Vec<usize>,
}

impl Hits {
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

/// Every overlapping (enemy, bullet) pair marks both.  An enemy absorbing
/// several bullets is listed once; so is a bullet touching several enemies.
pub fn bullet_hits(enemies: &[Enemy], bullets: &[Bullet]) -> Hits {
    let mut enemy_hit = vec![false; enemies.len()];
    let mut bullet_hit = vec![false; bullets.len()];

    for (ei, enemy) in enemies.iter().enumerate() {
        for (bi, bullet) in bullets.iter().enumerate() {
            if enemy.rect.overlaps(&bullet.rect) {
                enemy_hit[ei] = true;
                bullet_hit[bi] = true;
            }
        }
    }

    Hits {
        enemies: marked(&enemy_hit),
        bullets: marked(&bullet_hit),
    }
}

fn marked(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter(|&(_, &hit)| hit)
        .map(|(i, _)| i)
        .collect()
}

/// Whether the player touches any enemy.
pub fn player_hit(player: &Player, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| player.rect.overlaps(&e.rect))
}
