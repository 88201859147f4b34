mod dataset_window;
