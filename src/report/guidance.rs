//! Static guidance appended to the markdown report when `[report] guidance` is on.

pub const CONNECTIONS_TIP: &str =
    "Tip: the connections page can be long. Use your browser's Find (Ctrl+F) to scan for big services.";

pub const ACCURATE_ANSWERS: &str = "\
### 1) Review connected apps (OAuth / \"Sign in with Google\")

Open https://myaccount.google.com/connections and scroll through **Third-party apps & services**.

- Look for high-impact services: financial tools, creator platforms, subscriptions, work software.
- If the list is long and you don't recognise every entry, your dependency is probably higher than you think.

### 2) Review account security and recovery

Open https://myaccount.google.com/security and check:

- Recovery email
- Recovery phone
- 2-step verification methods
- Devices signed in

Then ask: if this account were locked, how hard would recovery be?

### 3) Export your data (Google Takeout)

Open https://takeout.google.com/ and:

1. Click **Deselect all**.
2. Select only the key services (Gmail, Drive, Photos, Calendar).
3. Click **Next step**.
4. Choose file type **.zip**, file size **2GB or 4GB**, delivery **Send download link via email**.
5. Click **Create export**.

When it finishes, download the archive(s), note the **total size** (your archive gravity, \
recordable as `[archive] takeout_size_gb`), and store the export somewhere **outside Google**.

If you have never done this, your redundancy is likely low.
";

pub const SELECTIVE_BACKUP: &str = "\
Instead of exporting everything, deliberately organise and preserve the parts of the account that \
matter most. This does not replace Takeout; it is a faster backup layer that is easier to maintain.

### A) Google Photos: album-based backup

1. Create a few meaningful albums.
2. Add only the most valuable or irreplaceable photos to them.
3. On desktop, open an album and use **Download all** (one .zip per album).
4. Store the album archives outside Google (external drive, local archive folder).
5. Repeat on a schedule (monthly, quarterly or yearly).

Album ideas: family and people you care about, identity and documents (IDs, medical, insurance), \
work or portfolio, core memories, receipts and purchases.

### B) Drive: a \"Vault\" folder with an offline mirror

Create one Drive folder (e.g. **Drive Vault** or **Critical**), move or copy the most important \
documents into it, and periodically download it to local storage. Optionally keep a second copy on an \
external drive.

### C) Gmail: labels as an export plan

Label mail such as **Receipts**, **Legal**, **Medical**, **Taxes**, **Identity**, **Work** over time \
(or with filters) so the valuable categories are organised before you export. Takeout still exports \
the full mailbox.

**Don't \"backup everything\" as a fantasy. Backup the irreplaceable as a reality.**
";
