// Wed Aug 26 2026 - Alex

use crate::layout::{
    largest_pow2_factor, try_padding_size, try_tail_aligned_size, LayoutError,
    SizeRecord,
};
use serde::Serialize;

/// One point in a walk where padding had to be inserted before a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaddingStep {
    pub index: usize,
    pub label: String,
    pub padding: usize,
}

/// Outcome of walking one member ordering: where padding landed, how much
/// trailed at the end, and the resulting total size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutWalk {
    pub steps: Vec<PaddingStep>,
    pub trailing_padding: usize,
    pub total_size: usize,
}

/// Everything the demo knows about one member set in one ordering.
#[derive(Debug, Clone, Serialize)]
pub struct MemberSetReport {
    pub name: String,
    pub members: Vec<SizeRecord>,
    pub alignment_requirement: usize,
    pub incremental: LayoutWalk,
    pub informed: LayoutWalk,
}

impl MemberSetReport {
    pub fn build(name: impl Into<String>, members: &[SizeRecord]) -> Result<Self, LayoutError> {
        Ok(Self {
            name: name.into(),
            members: members.to_vec(),
            alignment_requirement: alignment_requirement(members),
            incremental: incremental_walk(members)?,
            informed: informed_walk(members)?,
        })
    }
}

/// Strictest heuristic alignment factor across a member set; 0 when the
/// set is empty.
pub fn alignment_requirement(members: &[SizeRecord]) -> usize {
    members
        .iter()
        .map(|m| largest_pow2_factor(m.size()))
        .max()
        .unwrap_or(0)
}

/// Grow the structure member by member, treating the running size as the
/// head and each next member as the tail. Every intermediate total is
/// aligned for everything placed so far, which over-pads compared to the
/// informed walk.
pub fn incremental_walk(members: &[SizeRecord]) -> Result<LayoutWalk, LayoutError> {
    let mut steps = Vec::new();

    let mut sum = match members.first() {
        Some(first) => first.size(),
        None => {
            return Ok(LayoutWalk {
                steps,
                trailing_padding: 0,
                total_size: 0,
            })
        }
    };

    for (index, member) in members.iter().enumerate().skip(1) {
        let padding = try_padding_size(sum, member.size())?;
        if padding > 0 {
            steps.push(PaddingStep {
                index,
                label: member.label().to_string(),
                padding,
            });
        }
        sum = try_tail_aligned_size(sum, member.size())?;
    }

    Ok(LayoutWalk {
        steps,
        trailing_padding: 0,
        total_size: sum,
    })
}

/// Lay the structure out knowing every member up front: pad each member to
/// its own factor, then pad the end so the whole structure is a multiple
/// of the set's alignment requirement.
pub fn informed_walk(members: &[SizeRecord]) -> Result<LayoutWalk, LayoutError> {
    let mut steps = Vec::new();

    let mut sum = match members.first() {
        Some(first) => first.size(),
        None => {
            return Ok(LayoutWalk {
                steps,
                trailing_padding: 0,
                total_size: 0,
            })
        }
    };

    for (index, member) in members.iter().enumerate().skip(1) {
        let factor = largest_pow2_factor(member.size());
        sum = sum
            .checked_add(member.size())
            .ok_or(LayoutError::Overflow)?;

        let remainder = sum % factor;
        if remainder != 0 {
            let padding = factor - remainder;
            steps.push(PaddingStep {
                index,
                label: member.label().to_string(),
                padding,
            });
            sum = sum.checked_add(padding).ok_or(LayoutError::Overflow)?;
        }
    }

    let requirement = alignment_requirement(members);
    let remainder = sum % requirement;
    let trailing_padding = if remainder != 0 {
        let padding = requirement - remainder;
        sum = sum.checked_add(padding).ok_or(LayoutError::Overflow)?;
        padding
    } else {
        0
    };

    Ok(LayoutWalk {
        steps,
        trailing_padding,
        total_size: sum,
    })
}
