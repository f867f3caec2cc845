//! Heap sort as a resumable sequence of suspension points.
//!
//! [`HeapStepper`] owns the sequence and a queue of pending tasks. Each call
//! to `next()` runs the algorithm up to the next observable moment and
//! returns the [`StepEvent`] for it:
//!
//! - before comparing a node with its children (`Compare`)
//! - after a sift-down swap (`Swap`)
//! - after moving the heap root into the sorted suffix (`Extract`)
//!
//! The sift-down recursion is flattened: instead of calling itself, a
//! heapify step pushes the follow-up task to the front of the queue. Nothing
//! here knows about time; pacing is the controller's job.
//!
//! # Example
//!
//! ```
//! use heapviz::sort::HeapStepper;
//!
//! let mut stepper = HeapStepper::full_run(vec![4, 10, 3, 5, 1]);
//! let events: Vec<_> = stepper.by_ref().collect();
//! assert_eq!(events.len(), 20);
//! assert_eq!(stepper.data(), &[1, 3, 4, 5, 10]);
//! assert_eq!(stepper.sorted_count(), 5);
//! ```

use std::collections::VecDeque;

use super::event::{StepEvent, StepKind};

/// Pending unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// Announce the comparison of `root` with its children.
    Compare { heap_size: usize, root: usize },
    /// Pick the largest of `root` and its children, swapping if needed.
    Settle { heap_size: usize, root: usize },
    /// Swap the root with `end` and grow the sorted suffix.
    Extract { end: usize },
    /// The whole sequence is in its final order.
    Finish,
}

/// Step-by-step heap sort over an owned sequence.
#[derive(Debug, Clone)]
pub struct HeapStepper<T = u32> {
    data: Vec<T>,
    sorted_count: usize,
    tasks: VecDeque<Task>,
    steps: usize,
}

impl<T: Ord + Clone> HeapStepper<T> {
    /// Stepper with nothing scheduled.
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            sorted_count: 0,
            tasks: VecDeque::new(),
            steps: 0,
        }
    }

    /// Stepper scheduled for a complete heap sort: build the heap, then
    /// extract the maximum for every end index from `N-1` down to `1`.
    pub fn full_run(data: Vec<T>) -> Self {
        let mut stepper = Self::new(data);
        stepper.build_heap();
        for end in (1..stepper.data.len()).rev() {
            stepper.extract_max(end);
        }
        stepper.tasks.push_back(Task::Finish);
        stepper
    }

    /// Schedule a bottom-up heap build over the whole sequence.
    ///
    /// Heapifies every internal node from `N/2 - 1` down to `0`.
    pub fn build_heap(&mut self) -> &mut Self {
        let n = self.data.len();
        for root in (0..n / 2).rev() {
            self.heapify(n, root);
        }
        self
    }

    /// Schedule a sift-down of `root` within the first `heap_size` elements.
    ///
    /// Requests for a root outside the heap are ignored.
    pub fn heapify(&mut self, heap_size: usize, root: usize) -> &mut Self {
        let heap_size = heap_size.min(self.data.len());
        if root < heap_size {
            self.tasks.push_back(Task::Compare { heap_size, root });
        }
        self
    }

    /// Schedule moving the heap root to `end`, followed by `heapify(end, 0)`.
    ///
    /// `end` must be in `1..N`; anything else is ignored.
    pub fn extract_max(&mut self, end: usize) -> &mut Self {
        if end >= 1 && end < self.data.len() {
            self.tasks.push_back(Task::Extract { end });
        }
        self
    }

    /// Run every scheduled task without yielding, returning the step count.
    pub fn run_to_end(&mut self) -> usize {
        self.by_ref().count()
    }

    fn compare_set(heap_size: usize, root: usize) -> Vec<usize> {
        [root, 2 * root + 1, 2 * root + 2]
            .into_iter()
            .filter(|&idx| idx < heap_size)
            .collect()
    }

    /// Index of the largest of `root` and its in-heap children.
    ///
    /// Strict `>`: on equal values the earlier index wins, so ties never swap.
    fn largest(&self, heap_size: usize, root: usize) -> usize {
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        let mut largest = root;
        if left < heap_size && self.data[left] > self.data[largest] {
            largest = left;
        }
        if right < heap_size && self.data[right] > self.data[largest] {
            largest = right;
        }
        largest
    }
}

impl<T> HeapStepper<T> {
    /// Current contents of the sequence.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the stepper and take the sequence back.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Length of the trailing sorted suffix.
    pub fn sorted_count(&self) -> usize {
        self.sorted_count
    }

    /// Number of events emitted so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// True once every scheduled task has run.
    pub fn is_finished(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T: Ord + Clone> Iterator for HeapStepper<T> {
    type Item = StepEvent<T>;

    fn next(&mut self) -> Option<StepEvent<T>> {
        loop {
            let event = match self.tasks.pop_front()? {
                Task::Compare { heap_size, root } => {
                    self.tasks.push_front(Task::Settle { heap_size, root });
                    StepEvent::compare(
                        &self.data,
                        Self::compare_set(heap_size, root),
                        self.sorted_count,
                    )
                }
                Task::Settle { heap_size, root } => {
                    let largest = self.largest(heap_size, root);
                    if largest == root {
                        continue;
                    }
                    self.data.swap(root, largest);
                    self.tasks.push_front(Task::Compare {
                        heap_size,
                        root: largest,
                    });
                    StepEvent::swap(StepKind::Swap, &self.data, [root, largest], self.sorted_count)
                }
                Task::Extract { end } => {
                    self.data.swap(0, end);
                    self.sorted_count += 1;
                    self.tasks.push_front(Task::Compare {
                        heap_size: end,
                        root: 0,
                    });
                    StepEvent::swap(StepKind::Extract, &self.data, [0, end], self.sorted_count)
                }
                Task::Finish => {
                    self.sorted_count = self.data.len();
                    continue;
                }
            };
            self.steps += 1;
            return Some(event);
        }
    }
}

/// Check the max-heap property over the first `heap_size` elements.
pub fn is_max_heap<T: Ord>(data: &[T], heap_size: usize) -> bool {
    let heap_size = heap_size.min(data.len());
    (0..heap_size).all(|i| {
        [2 * i + 1, 2 * i + 2]
            .into_iter()
            .filter(|&c| c < heap_size)
            .all(|c| data[i] >= data[c])
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(events: &[StepEvent<u32>]) -> Vec<(StepKind, Vec<usize>)> {
        events
            .iter()
            .map(|e| {
                let idx = match e.kind {
                    StepKind::Compare => e.compared.clone(),
                    _ => e.swapped.clone(),
                };
                (e.kind, idx)
            })
            .collect()
    }

    #[test]
    fn test_full_run_reference_trace() {
        use StepKind::{Compare as C, Extract as E, Swap as S};

        let mut stepper = HeapStepper::full_run(vec![4, 10, 3, 5, 1]);
        let events: Vec<_> = stepper.by_ref().collect();

        let expected = vec![
            // build heap
            (C, vec![1, 3, 4]),
            (C, vec![0, 1, 2]),
            (S, vec![0, 1]),
            (C, vec![1, 3, 4]),
            (S, vec![1, 3]),
            (C, vec![3]),
            // end = 4
            (E, vec![0, 4]),
            (C, vec![0, 1, 2]),
            (S, vec![0, 1]),
            (C, vec![1, 3]),
            (S, vec![1, 3]),
            (C, vec![3]),
            // end = 3
            (E, vec![0, 3]),
            (C, vec![0, 1, 2]),
            (S, vec![0, 1]),
            (C, vec![1]),
            // end = 2
            (E, vec![0, 2]),
            (C, vec![0, 1]),
            // end = 1
            (E, vec![0, 1]),
            (C, vec![0]),
        ];
        assert_eq!(trace(&events), expected);
        assert_eq!(stepper.data(), &[1, 3, 4, 5, 10]);
        assert_eq!(stepper.sorted_count(), 5);
        assert_eq!(stepper.steps(), 20);
        assert!(stepper.is_finished());
    }

    #[test]
    fn test_build_heap_five_values() {
        let mut stepper = HeapStepper::new(vec![5, 3, 8, 1, 9]);
        stepper.build_heap().run_to_end();
        assert_eq!(stepper.data(), &[9, 5, 8, 1, 3]);
        assert!(is_max_heap(stepper.data(), 5));
        assert_eq!(stepper.sorted_count(), 0);
    }

    #[test]
    fn test_full_sort_five_values() {
        let mut stepper = HeapStepper::full_run(vec![5, 3, 8, 1, 9]);
        stepper.run_to_end();
        assert_eq!(stepper.into_data(), vec![1, 3, 5, 8, 9]);
    }

    #[test]
    fn test_equal_values_never_swap() {
        let mut stepper = HeapStepper::new(vec![7, 7, 7]);
        let events: Vec<_> = stepper.build_heap().by_ref().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, StepKind::Compare);
        assert_eq!(events[0].compared, vec![0, 1, 2]);
    }

    #[test]
    fn test_heapify_single_subtree() {
        let mut stepper = HeapStepper::new(vec![1, 5, 4, 3, 2]);
        let events: Vec<_> = stepper.heapify(5, 0).by_ref().collect();
        // compare root, swap with 5, compare at 1, swap with 3, compare leaf
        assert_eq!(events.len(), 5);
        assert_eq!(stepper.data(), &[5, 3, 4, 1, 2]);
        assert!(is_max_heap(stepper.data(), 5));
    }

    #[test]
    fn test_heapify_respects_heap_size() {
        let mut stepper = HeapStepper::new(vec![1, 2, 9]);
        let events: Vec<_> = stepper.heapify(2, 0).by_ref().collect();
        assert_eq!(events[0].compared, vec![0, 1]);
        assert_eq!(stepper.data(), &[2, 1, 9]);
    }

    #[test]
    fn test_heapify_out_of_range_ignored() {
        let mut stepper = HeapStepper::new(vec![1, 2, 3]);
        stepper.heapify(3, 3).heapify(1, 2);
        assert!(stepper.is_finished());
        assert_eq!(stepper.next(), None);
    }

    #[test]
    fn test_extract_max_increments_sorted() {
        let mut stepper = HeapStepper::new(vec![9, 5, 8]);
        let first = stepper.extract_max(2).next().unwrap();
        assert_eq!(first.kind, StepKind::Extract);
        assert_eq!(first.swapped, vec![0, 2]);
        assert_eq!(first.data, vec![8, 5, 9]);
        assert_eq!(first.sorted_count, 1);
        stepper.run_to_end();
        assert_eq!(stepper.data(), &[8, 5, 9]);
    }

    #[test]
    fn test_extract_max_invalid_end_ignored() {
        let mut stepper = HeapStepper::new(vec![1, 2]);
        stepper.extract_max(0).extract_max(2);
        assert!(stepper.is_finished());
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: HeapStepper<u32> = HeapStepper::full_run(vec![]);
        assert_eq!(empty.run_to_end(), 0);
        assert_eq!(empty.sorted_count(), 0);

        let mut one = HeapStepper::full_run(vec![42]);
        assert_eq!(one.run_to_end(), 0);
        assert_eq!(one.sorted_count(), 1);
        assert_eq!(one.data(), &[42]);
    }

    #[test]
    fn test_two_elements() {
        let mut stepper = HeapStepper::full_run(vec![8, 3]);
        stepper.run_to_end();
        assert_eq!(stepper.data(), &[3, 8]);
    }

    #[test]
    fn test_duplicates_sorted() {
        let mut stepper = HeapStepper::full_run(vec![3, 1, 2, 1, 3, 0]);
        stepper.run_to_end();
        assert_eq!(stepper.data(), &[0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn test_generic_values() {
        let mut stepper = HeapStepper::full_run(vec!['m', 'a', 'z', 'b', 'y']);
        stepper.run_to_end();
        assert_eq!(stepper.data(), &['a', 'b', 'm', 'y', 'z']);
    }

    #[test]
    fn test_sorted_suffix_never_mutated() {
        let data = vec![12, 45, 3, 27, 8, 33, 19, 50, 1, 7, 22, 38, 14, 5, 41];
        let mut stepper = HeapStepper::full_run(data);
        let mut frozen: Vec<Option<u32>> = vec![None; 15];
        for event in stepper.by_ref() {
            let n = event.data.len();
            for i in n - event.sorted_count..n {
                match frozen[i] {
                    Some(v) => assert_eq!(event.data[i], v, "sorted slot {i} changed"),
                    None => frozen[i] = Some(event.data[i]),
                }
            }
        }
        assert_eq!(stepper.data(), &[1, 3, 5, 7, 8, 12, 14, 19, 22, 27, 33, 38, 41, 45, 50]);
    }

    #[test]
    fn test_is_max_heap() {
        assert!(is_max_heap(&[9, 5, 8, 1, 3], 5));
        assert!(!is_max_heap(&[5, 9, 8], 3));
        // only the prefix matters
        assert!(is_max_heap(&[5, 1, 9], 2));
        assert!(is_max_heap::<u32>(&[], 0));
    }
}
