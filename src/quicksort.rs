//! Quicksort, twice.
//!
//! The out-of-place variant reads naturally but allocates per recursion
//! level; the in-place variant is the textbook Lomuto partition working
//! directly on the slice.

/// Sort by copying: three-way partition around the middle element, then
/// recurse on the strictly-smaller and strictly-larger parts.
///
/// Duplicates of the pivot land in the middle band untouched, so heavily
/// repeated inputs do not degrade the recursion.
pub fn quicksort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let pivot = input[input.len() / 2].clone();
    let mut smaller = Vec::new();
    let mut equal = Vec::new();
    let mut larger = Vec::new();
    for x in input {
        match x.cmp(&pivot) {
            std::cmp::Ordering::Less => smaller.push(x.clone()),
            std::cmp::Ordering::Equal => equal.push(x.clone()),
            std::cmp::Ordering::Greater => larger.push(x.clone()),
        }
    }

    let mut sorted = quicksort(&smaller);
    sorted.append(&mut equal);
    sorted.append(&mut quicksort(&larger));
    sorted
}

/// Sort the slice in place with Lomuto partitioning (last element as
/// pivot).
pub fn quicksort_in_place<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quicksort_in_place(left);
    quicksort_in_place(&mut right[1..]);
}

/// Move everything `<=` the last element ahead of it, place the pivot
/// after that run, and return its final index.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut boundary = 0;
    for j in 0..pivot {
        if arr[j] <= arr[pivot] {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    arr.swap(boundary, pivot);
    boundary
}
